/// Background advisor calls for the TUI
///
/// The event loop stays single-threaded. Each request is spawned on the
/// runtime and its outcome comes back over an unbounded channel that the
/// loop drains once per tick, in completion order.
use career_core::{AdvisorError, CareerAdvisor, Profile, Recommendation, Resume, SkillGap};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvisorRequest {
    Recommendations { profile: Profile },
    OptimizeResume { resume: Resume, target_role: String },
    SkillGaps { profile: Profile, target_role: String },
}

impl AdvisorRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            AdvisorRequest::Recommendations { .. } => "recommendations",
            AdvisorRequest::OptimizeResume { .. } => "optimize-resume",
            AdvisorRequest::SkillGaps { .. } => "skill-gaps",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvisorEvent {
    Recommendations(Result<Vec<Recommendation>, AdvisorError>),
    OptimizedResume(Result<Resume, AdvisorError>),
    SkillGaps(Result<Vec<SkillGap>, AdvisorError>),
}

/// Run one request to completion against `advisor`
pub async fn run_request(advisor: Arc<dyn CareerAdvisor>, request: AdvisorRequest) -> AdvisorEvent {
    match request {
        AdvisorRequest::Recommendations { profile } => AdvisorEvent::Recommendations(
            advisor.generate_career_recommendations(&profile).await,
        ),
        AdvisorRequest::OptimizeResume {
            resume,
            target_role,
        } => AdvisorEvent::OptimizedResume(advisor.optimize_resume(&resume, &target_role).await),
        AdvisorRequest::SkillGaps {
            profile,
            target_role,
        } => AdvisorEvent::SkillGaps(advisor.analyze_skill_gaps(&profile, &target_role).await),
    }
}

pub struct AdvisorWorker {
    advisor: Arc<dyn CareerAdvisor>,
    handle: Handle,
    tx: UnboundedSender<AdvisorEvent>,
}

impl AdvisorWorker {
    pub fn new(
        advisor: Arc<dyn CareerAdvisor>,
        handle: Handle,
    ) -> (Self, UnboundedReceiver<AdvisorEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                advisor,
                handle,
                tx,
            },
            rx,
        )
    }

    /// Spawn the request; a panicked or aborted call reports `Interrupted`
    pub fn dispatch(&self, request: AdvisorRequest) {
        log::debug!("[worker] Dispatching {} request", request.kind());
        let advisor = Arc::clone(&self.advisor);
        let tx = self.tx.clone();
        let handle = self.handle.clone();

        let on_failure: fn(AdvisorError) -> AdvisorEvent = match &request {
            AdvisorRequest::Recommendations { .. } => |e| AdvisorEvent::Recommendations(Err(e)),
            AdvisorRequest::OptimizeResume { .. } => |e| AdvisorEvent::OptimizedResume(Err(e)),
            AdvisorRequest::SkillGaps { .. } => |e| AdvisorEvent::SkillGaps(Err(e)),
        };

        self.handle.spawn(async move {
            let kind = request.kind();
            let event = match handle.spawn(run_request(advisor, request)).await {
                Ok(event) => event,
                Err(e) => {
                    log::error!("[worker] {} call did not complete: {}", kind, e);
                    on_failure(AdvisorError::Interrupted(e.to_string()))
                }
            };
            if tx.send(event).is_err() {
                log::warn!("[worker] Dropping {} result, receiver closed", kind);
            }
        });
    }
}
