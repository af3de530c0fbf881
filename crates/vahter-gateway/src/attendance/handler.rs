use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    Form,
};

use vahter_core::Submission;

use crate::app_state::AppState;

use super::page;

/// Fields posted by the attendance form. Missing fields decode as empty.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AttendanceForm {
    pub name: String,
    pub role: String,
    pub note: String,
}

impl AttendanceForm {
    /// Build from decoded `key=value` pairs. A repeated key keeps its first
    /// value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut name = None;
        let mut role = None;
        let mut note = None;
        for (k, v) in pairs {
            let slot = match k.as_str() {
                "name" => &mut name,
                "role" => &mut role,
                "note" => &mut note,
                _ => continue,
            };
            slot.get_or_insert(v);
        }
        Self {
            name: name.unwrap_or_default(),
            role: role.unwrap_or_default(),
            note: note.unwrap_or_default(),
        }
    }
}

impl From<AttendanceForm> for Submission {
    fn from(f: AttendanceForm) -> Self {
        Submission::new(f.name, f.role, f.note)
    }
}

/// `GET /`
pub async fn index(State(state): State<AppState>) -> Html<String> {
    render(&state)
}

/// `POST /`: rejected submissions re-render the page without any message.
pub async fn submit(
    State(state): State<AppState>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Html<String> {
    let form = match form {
        Ok(Form(pairs)) => AttendanceForm::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "undecodable form body, treating fields as empty");
            AttendanceForm::default()
        }
    };

    let outcome = state.store().submit_form(&form.into());
    tracing::debug!(outcome = outcome.as_str(), "submission handled");
    render(&state)
}

fn render(state: &AppState) -> Html<String> {
    let records = state.store().list_ordered();
    Html(page::render(&state.cfg().page.title, &records))
}
