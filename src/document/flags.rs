use std::fmt;
use std::fmt::{Display, Formatter};

pub const FORM_SLOT_COUNT: usize = 51;

/// Slot of the base form that every report contains.
pub const BASE_FORM_SLOT: usize = 5;

/// Every form id known to the schema, at its fixed position in `SYUUSHI_UMU`.
pub const FORM_SLOTS: [&str; FORM_SLOT_COUNT] = [
    "SYUUSHI01", "SYUUSHI02", "SYUUSHI03", "SYUUSHI04", "SYUUSHI05",
    "SYUUSHI07_01", "SYUUSHI07_02", "SYUUSHI07_03", "SYUUSHI07_04", "SYUUSHI07_05",
    "SYUUSHI07_06", "SYUUSHI07_07", "SYUUSHI07_08", "SYUUSHI07_09", "SYUUSHI07_10",
    "SYUUSHI07_11", "SYUUSHI07_12", "SYUUSHI07_13", "SYUUSHI07_14", "SYUUSHI07_15",
    "SYUUSHI07_16", "SYUUSHI07_17", "SYUUSHI07_18", "SYUUSHI07_19", "SYUUSHI07_20",
    "SYUUSHI08",
    "SYUUSHI08_01", "SYUUSHI08_02", "SYUUSHI08_03", "SYUUSHI08_04", "SYUUSHI08_05",
    "SYUUSHI08_06", "SYUUSHI08_07", "SYUUSHI08_08", "SYUUSHI08_09", "SYUUSHI08_10",
    "SYUUSHI08_11", "SYUUSHI08_12", "SYUUSHI08_13", "SYUUSHI08_14", "SYUUSHI08_15",
    "SYUUSHI09",
    "SYUUSHI09_01", "SYUUSHI09_02", "SYUUSHI09_03", "SYUUSHI09_04", "SYUUSHI09_05",
    "SYUUSHI09_06", "SYUUSHI09_07", "SYUUSHI09_08", "SYUUSHI09_09"
];

/// Position of a form id in the presence mask, `None` for ids the schema does not know.
pub fn form_slot(form_id: &str) -> Option<usize> {
    FORM_SLOTS.iter().position(|known| *known == form_id)
}

/// Fixed-width `'0'`/`'1'` flags telling which forms a document contains.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FormPresenceMask([bool; FORM_SLOT_COUNT]);

impl FormPresenceMask {
    pub fn is_set(&self, slot: usize) -> bool {
        self.0.get(slot).copied().unwrap_or(false)
    }

    pub fn count(&self) -> usize {
        self.0.iter().filter(|flag| **flag).count()
    }
}

impl Default for FormPresenceMask {
    /// Only the base form is present.
    fn default() -> Self {
        let mut flags = [false; FORM_SLOT_COUNT];
        flags[BASE_FORM_SLOT] = true;
        Self(flags)
    }
}

impl Display for FormPresenceMask {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        for flag in self.0 {
            formatter.write_str(if flag { "1" } else { "0" })?;
        }

        Ok(())
    }
}

/// Builds the presence mask from the ids of the populated forms.
///
/// Ids the schema does not know are skipped. An empty list yields the default mask
/// with only the base form set.
pub fn build_flag_mask<I, S>(form_ids: I) -> FormPresenceMask
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>
{
    let mut form_ids = form_ids.into_iter().peekable();

    if form_ids.peek().is_none() {
        return FormPresenceMask::default();
    }

    let mut flags = [false; FORM_SLOT_COUNT];

    for slot in form_ids.filter_map(|form_id| form_slot(form_id.as_ref())) {
        flags[slot] = true;
    }

    FormPresenceMask(flags)
}
