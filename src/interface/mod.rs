pub mod prompts;
pub mod render;
pub mod tags;

pub use prompts::{
    collect_profile, parse_limit, prompt_conditions, prompt_limit, prompt_restrictions,
    prompt_yes_no,
};
pub use render::{display_batch, display_grade_result, display_thresholds};
pub use tags::{resolve_condition, resolve_restriction, suggest};
