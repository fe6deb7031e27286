mod builder;
mod errors;
mod flags;

pub use builder::{render_report, DocumentBuilder, FLAG_MASK_TAG, ROOT_TAG, XML_DECLARATION};
pub use errors::RenderError;
pub use flags::{build_flag_mask, form_slot, FormPresenceMask, BASE_FORM_SLOT, FORM_SLOTS, FORM_SLOT_COUNT};
