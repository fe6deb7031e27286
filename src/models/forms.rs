/// Statutory forms this crate produces, in the order they appear in the document.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum FormId {
    /// 団体の概要
    Profile,
    /// 収支の総括表
    Summary,
    BusinessIncome,
    LoanIncome,
    GrantIncome,
    OtherIncome,
    PersonalDonation,
    /// 経常経費 (光熱水費, 備品・消耗品費, 事務所費)
    OrdinaryExpense,
    GrantExpenditure
}

impl FormId {
    pub const ALL: [FormId; 9] = [
        FormId::Profile,
        FormId::Summary,
        FormId::BusinessIncome,
        FormId::LoanIncome,
        FormId::GrantIncome,
        FormId::OtherIncome,
        FormId::PersonalDonation,
        FormId::OrdinaryExpense,
        FormId::GrantExpenditure
    ];

    /// Element name of the form in the report schema.
    pub fn tag(self) -> &'static str {
        match self {
            FormId::Profile => "SYUUSHI07_01",
            FormId::Summary => "SYUUSHI07_02",
            FormId::BusinessIncome => "SYUUSHI07_03",
            FormId::LoanIncome => "SYUUSHI07_04",
            FormId::GrantIncome => "SYUUSHI07_05",
            FormId::OtherIncome => "SYUUSHI07_06",
            FormId::PersonalDonation => "SYUUSHI07_07",
            FormId::OrdinaryExpense => "SYUUSHI07_14",
            FormId::GrantExpenditure => "SYUUSHI07_16"
        }
    }
}

/// Categories printed as separate sheets of the ordinary expense form.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ExpenseCategory {
    Utility,
    Supplies,
    Office
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 3] = [ExpenseCategory::Utility, ExpenseCategory::Supplies, ExpenseCategory::Office];

    pub fn kubun(self) -> u8 {
        match self {
            ExpenseCategory::Utility => 1,
            ExpenseCategory::Supplies => 2,
            ExpenseCategory::Office => 3
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ExpenseCategory::Utility => "光熱水費",
            ExpenseCategory::Supplies => "備品・消耗品費",
            ExpenseCategory::Office => "事務所費"
        }
    }
}
