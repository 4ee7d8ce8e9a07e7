pub mod prompts;
pub mod spinner;
pub mod table;

pub use prompts::{
    LoginInput, prompt_confirmation, prompt_delete_confirmation, prompt_login, prompt_new_password,
    text_or_prompt,
};
pub use spinner::{Spinner, with_spinner};
pub use table::{
    render_complaints_table, render_dashboard, render_feedback_table, render_page_footer,
    render_reference_table, render_users_table,
};
