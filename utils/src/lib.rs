//! Stateless helpers for unikit.
//!
//! Every function here is pure: inputs are borrowed and never modified, and a
//! fresh value (or a borrowed slice of the input) is returned.
//!
//! - **`classify`**: runtime category of a value
//! - **`merge`**: shallow mapping merge, right-hand side wins
//! - **`text`**: whitespace trimming and header-name normalization
//! - **`contains`** / **`matches`**: key, element and substring lookups
//! - **`mime`**: media type without parameters
//! - **`id`**: random identifiers

mod classify;
pub mod contains;
pub mod id;
pub mod matches;
pub mod merge;
pub mod mime;
pub mod text;

pub use classify::classify;
pub use contains::{contains, contains_element, contains_in, contains_key, contains_substring};
pub use id::{IdGenerator, generate_id};
pub use matches::{
    first_element_match, first_key_match, match_all, match_all_in, match_elements, match_first,
    match_keys,
};
pub use merge::{merge, merge_values};
pub use mime::{mime_type, parse_mime_type};
pub use text::{normalize_header_name, set_char_at, trim};
