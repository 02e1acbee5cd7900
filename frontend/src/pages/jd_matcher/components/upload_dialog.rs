use crate::{
    components::{
        common::{Button, ButtonVariant},
        modal::Modal,
    },
    pages::jd_matcher::{
        utils::{JobField, SelectedFile, Submission},
        view_model::UploadViewModel,
    },
    utils::format_file_size,
};
use leptos::ev::DragEvent;
use leptos::*;

const FIELD_CLASS: &str = "block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-form-control-text placeholder-form-control-placeholder focus:outline-none focus:ring-2 focus:ring-action-primary-focus";

fn first_dropped_file(ev: &DragEvent) -> Option<web_sys::File> {
    ev.data_transfer()?.files()?.get(0)
}

#[component]
pub fn ResumeUploadDialog(vm: UploadViewModel) -> impl IntoView {
    let on_close = Callback::new(move |_| vm.reset());

    view! {
        <Modal
            is_open=vm.is_open.into()
            title="Analyze your résumé"
            description="Upload a PDF or Word document and paste the job you are targeting."
            on_close=on_close
        >
            <form
                class="space-y-4"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.start_analysis();
                }
            >
                <DropZone vm=vm />
                <JobDetailsFields vm=vm />
                <div class="flex justify-end gap-2">
                    <Button
                        variant=ButtonVariant::Secondary
                        attr:type="button"
                        on:click=move |_| vm.reset()
                    >
                        "Cancel"
                    </Button>
                    <Button
                        variant=ButtonVariant::Primary
                        attr:type="submit"
                        disabled=Signal::derive(move || !vm.can_submit())
                        loading=Signal::derive(move || vm.submission.get() == Submission::InFlight)
                    >
                        {move || match vm.submission.get() {
                            Submission::InFlight => "Analyzing...",
                            Submission::Idle => "Analyze",
                        }}
                    </Button>
                </div>
            </form>
        </Modal>
    }
}

#[component]
fn DropZone(vm: UploadViewModel) -> impl IntoView {
    let zone_class = move || {
        if vm.drag_active.get() {
            "flex flex-col items-center justify-center rounded-lg border-2 border-dashed border-action-primary-border bg-surface-muted p-6 text-center cursor-pointer"
        } else {
            "flex flex-col items-center justify-center rounded-lg border-2 border-dashed border-border-strong p-6 text-center cursor-pointer"
        }
    };

    view! {
        <label
            for="resume-file"
            class=zone_class
            on:dragover=move |ev: DragEvent| {
                ev.prevent_default();
                vm.drag_active.set(true);
            }
            on:dragleave=move |_| vm.drag_active.set(false)
            on:drop=move |ev: DragEvent| {
                ev.prevent_default();
                vm.drag_active.set(false);
                if let Some(file) = first_dropped_file(&ev) {
                    vm.select_file(SelectedFile::from_browser(file));
                }
            }
        >
            <input
                id="resume-file"
                name="resume_file"
                type="file"
                accept=".pdf,.doc,.docx,application/pdf"
                class="sr-only"
                on:change=move |ev| {
                    let input = event_target::<web_sys::HtmlInputElement>(&ev);
                    if let Some(file) = input.files().and_then(|files| files.get(0)) {
                        vm.select_file(SelectedFile::from_browser(file));
                    }
                }
            />
            {move || match vm.selected_file.get() {
                Some(file) => view! {
                    <p class="text-sm font-medium text-fg">{file.name.clone()}</p>
                    <p class="text-xs text-fg-muted">{format_file_size(file.size)}</p>
                }
                    .into_view(),
                None => view! {
                    <p class="text-sm font-medium text-fg">"Drop your résumé here or click to browse"</p>
                    <p class="text-xs text-fg-muted">"PDF or Word document"</p>
                }
                    .into_view(),
            }}
        </label>
    }
}

#[component]
fn JobDetailsFields(vm: UploadViewModel) -> impl IntoView {
    let job = vm.job;
    view! {
        <div class="grid gap-4 sm:grid-cols-2">
            <div>
                <label for="job-title" class="block text-sm font-medium text-fg">"Job title"</label>
                <input
                    id="job-title"
                    type="text"
                    class=FIELD_CLASS
                    placeholder="Senior Engineer"
                    prop:value=move || job.with(|j| j.job_title.clone())
                    on:input=move |ev| vm.update_job_field(JobField::Title, event_target_value(&ev))
                />
            </div>
            <div>
                <label for="company-name" class="block text-sm font-medium text-fg">"Company"</label>
                <input
                    id="company-name"
                    type="text"
                    class=FIELD_CLASS
                    placeholder="Acme Corp"
                    prop:value=move || job.with(|j| j.company_name.clone())
                    on:input=move |ev| vm.update_job_field(JobField::Company, event_target_value(&ev))
                />
            </div>
        </div>
        <div>
            <label for="job-description" class="block text-sm font-medium text-fg">"Job description"</label>
            <textarea
                id="job-description"
                rows="8"
                class=FIELD_CLASS
                placeholder="Paste the full job description"
                prop:value=move || job.with(|j| j.job_description.clone())
                on:input=move |ev| vm.update_job_field(JobField::Description, event_target_value(&ev))
            ></textarea>
        </div>
    }
}
