use super::{
    repository::ResumeAnalysisRepository,
    utils::{submit_enabled, AnalysisRequest, JobDetails, JobField, SelectedFile, Submission},
};
use crate::{
    api::{AnalysisPayload, ApiClient, ApiError},
    router::{use_navigate_callback, RESUME_ANALYSIS_PATH},
    state::analysis::{use_analysis_result, AnalysisResultSlot},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct UploadViewModel {
    pub is_open: RwSignal<bool>,
    pub selected_file: RwSignal<Option<SelectedFile>>,
    pub job: RwSignal<JobDetails>,
    pub submission: RwSignal<Submission>,
    pub drag_active: RwSignal<bool>,
    pub analyse_action: Action<AnalysisRequest, Result<AnalysisPayload, ApiError>>,
    results: AnalysisResultSlot,
    navigate: Callback<String>,
}

impl UploadViewModel {
    pub fn new(
        repository: ResumeAnalysisRepository,
        results: AnalysisResultSlot,
        is_open: RwSignal<bool>,
        navigate: Callback<String>,
    ) -> Self {
        let analyse_action = create_action(move |request: &AnalysisRequest| {
            let repo = repository.clone();
            let request = request.clone();
            async move { repo.analyse(request).await }
        });

        Self {
            is_open,
            selected_file: create_rw_signal(None),
            job: create_rw_signal(JobDetails::default()),
            submission: create_rw_signal(Submission::Idle),
            drag_active: create_rw_signal(false),
            analyse_action,
            results,
            navigate,
        }
    }

    /// Keeps the file only if it is a PDF or document. Anything else is
    /// dropped without telling the user.
    pub fn select_file(&self, candidate: SelectedFile) {
        self.drag_active.set(false);
        if candidate.is_accepted() {
            self.selected_file.set(Some(candidate));
        } else {
            log::debug!(
                "ignoring {} with unsupported type {:?}",
                candidate.name,
                candidate.mime_type
            );
        }
    }

    pub fn update_job_field(&self, field: JobField, value: String) {
        self.job.update(|job| job.set(field, value));
    }

    pub fn can_submit(&self) -> bool {
        let submission = self.submission.get();
        self.job.with(|job| {
            self.selected_file
                .with(|file| submit_enabled(file.as_ref(), job, submission))
        })
    }

    pub fn start_analysis(&self) {
        let submission = self.submission.get_untracked();
        let file = self.selected_file.get_untracked();
        let job = self.job.get_untracked();
        if !submit_enabled(file.as_ref(), &job, submission) {
            return;
        }
        let Some(file) = file else {
            return;
        };
        self.submission.set(Submission::InFlight);
        self.results.clear();
        self.analyse_action.dispatch(AnalysisRequest { file, job });
    }

    /// Applies a finished analysis. Returns `true` when the caller should
    /// navigate to the results view.
    pub fn apply_result(&self, result: Result<AnalysisPayload, ApiError>) -> bool {
        let navigate = match result {
            Ok(payload) => {
                self.reset();
                self.results.store(payload);
                true
            }
            Err(err) => {
                log::error!("resume analysis failed: {} ({})", err, err.code);
                false
            }
        };
        let _ = self.submission.try_set(Submission::Idle);
        navigate
    }

    /// Clears the draft and closes the dialog. Used by cancel and every
    /// dismiss path.
    pub fn reset(&self) {
        let _ = self.selected_file.try_set(None);
        let _ = self.job.try_set(JobDetails::default());
        let _ = self.submission.try_set(Submission::Idle);
        let _ = self.drag_active.try_set(false);
        let _ = self.is_open.try_set(false);
    }

    fn show_results(&self) {
        self.navigate.call(RESUME_ANALYSIS_PATH.to_string());
    }
}

pub fn use_upload_view_model(is_open: RwSignal<bool>) -> UploadViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ResumeAnalysisRepository::new_with_client(Rc::new(api));
    let vm = UploadViewModel::new(
        repository,
        use_analysis_result(),
        is_open,
        use_navigate_callback(),
    );

    create_effect(move |_| {
        if let Some(result) = vm.analyse_action.value().get() {
            if vm.apply_result(result) {
                vm.show_results();
            }
        }
    });

    vm
}
