use crate::models::{BranchGrantRow, BusinessIncomeRow, DonationRow, ExpenseRow, LoanIncomeRow, OtherIncomeRow, SectionRow};
use crate::serialization::writer::XmlWriter;
use crate::types::WarekiError;

/// A section row that knows the element layout of its `ROW`.
pub trait XmlRow: SectionRow {
    fn write_fields(&self, writer: &mut XmlWriter) -> Result<(), WarekiError>;
}

impl XmlRow for OtherIncomeRow {
    fn write_fields(&self, writer: &mut XmlWriter) -> Result<(), WarekiError> {
        writer.text("ICHIREN_NO", &self.ichiren_no);
        writer.text("TEKIYOU", &self.tekiyou);
        writer.amount("KINGAKU", self.kingaku);
        writer.text("BIKOU", &self.bikou);

        Ok(())
    }
}

impl XmlRow for BusinessIncomeRow {
    fn write_fields(&self, writer: &mut XmlWriter) -> Result<(), WarekiError> {
        writer.text("ICHIREN_NO", &self.ichiren_no);
        writer.text("JIGYO_SYURUI", &self.kind);
        writer.amount("KINGAKU", self.kingaku);
        writer.text("BIKOU", &self.bikou);

        Ok(())
    }
}

impl XmlRow for LoanIncomeRow {
    fn write_fields(&self, writer: &mut XmlWriter) -> Result<(), WarekiError> {
        writer.text("ICHIREN_NO", &self.ichiren_no);
        writer.text("KARIIRESAKI", &self.lender_name);
        writer.amount("KINGAKU", self.kingaku);
        writer.date("DT", self.dt)?;
        writer.text("BIKOU", &self.bikou);

        Ok(())
    }
}

impl XmlRow for BranchGrantRow {
    fn write_fields(&self, writer: &mut XmlWriter) -> Result<(), WarekiError> {
        writer.text("ICHIREN_NO", &self.ichiren_no);
        writer.text("HONSIBU_NM", &self.branch_name);
        writer.amount("KINGAKU", self.kingaku);
        writer.date("DT", self.dt)?;
        writer.text("JIMU_JUSYO", &self.office_address);
        writer.text("BIKOU", &self.bikou);

        Ok(())
    }
}

impl XmlRow for DonationRow {
    fn write_fields(&self, writer: &mut XmlWriter) -> Result<(), WarekiError> {
        writer.text("ICHIREN_NO", &self.ichiren_no);
        writer.text("KIFUSYA_NM", &self.donor_name);
        writer.amount("KINGAKU", self.kingaku);
        writer.date("DT", self.dt)?;
        writer.text("JUSYO", &self.donor_address);
        writer.text("BIKOU", &self.bikou);

        Ok(())
    }
}

impl XmlRow for ExpenseRow {
    fn write_fields(&self, writer: &mut XmlWriter) -> Result<(), WarekiError> {
        writer.text("ICHIREN_NO", &self.ichiren_no);
        writer.text("MOKUTEKI", &self.purpose);
        writer.amount("KINGAKU", self.kingaku);
        writer.date("DT", self.dt)?;
        writer.text("NM", &self.payee_name);
        writer.text("JUSYO", &self.payee_address);
        writer.text("BIKOU", &self.bikou);

        Ok(())
    }
}
