mod rows;
mod sections;
mod summary;
mod writer;

pub use rows::XmlRow;
pub use sections::{
    serialize_business_income, serialize_grant_expenditure, serialize_grant_income, serialize_loan_income,
    serialize_ordinary_expenses, serialize_other_income, serialize_personal_donations
};
pub use summary::{serialize_profile, serialize_summary};
pub use writer::{escape_xml, XmlWriter};
