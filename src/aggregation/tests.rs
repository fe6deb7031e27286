use super::text::{build_bikou, sanitize, BIKOU_MAX_CHARS};
use super::{
    aggregate_business_income, aggregate_expense, aggregate_grant_expenditure, aggregate_grant_income,
    aggregate_loan_income, aggregate_other_income, aggregate_personal_donations, resolve_amount, AggregationError,
    AmountPriority
};

use std::str::FromStr;

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Section, SectionRow, TransactionRow, TransactionType, ValidationError};
use crate::types::{Yen, YenError};

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).expect("valid test date")
}

fn income(transaction_no: &str, label: &str, amount: i64) -> TransactionRow {
    TransactionRow::new(transaction_no, date(4, 1), TransactionType::Income)
        .with_credit("雑収入", Decimal::from(amount))
        .with_label(label)
}

fn expense(transaction_no: &str, label: &str, amount: i64) -> TransactionRow {
    TransactionRow::new(transaction_no, date(5, 10), TransactionType::Expense)
        .with_debit("光熱水費", Decimal::from(amount))
        .with_label(label)
        .with_counterpart("東京電力", "東京都千代田区内幸町1-1-3")
}

fn donation(transaction_no: &str, donor: &str, amount: i64) -> TransactionRow {
    TransactionRow::new(transaction_no, date(6, 1), TransactionType::Income)
        .with_credit("個人からの寄附", Decimal::from(amount))
        .with_counterpart(donor, "東京都港区")
}

fn assert_total_invariant<R: SectionRow>(section: &Section<R>) -> Result<()> {
    let rows = Yen::checked_sum(section.rows().iter().map(SectionRow::kingaku))?;
    let expected = rows.checked_add(section.under_threshold_amount().unwrap_or_default())?;

    assert_eq!(section.total_amount(), expected);

    Ok(())
}

#[test]
fn test_other_income_scenario_buckets_small_transactions() -> Result<()> {
    let transactions = vec![income("1", "テスト取引1", 150_000), income("2", "テスト取引2", 90_000)];

    let section = aggregate_other_income(&transactions)?;

    assert_eq!(section.total_amount(), Yen::new(240_000));
    assert_eq!(section.under_threshold_amount(), Some(Yen::new(90_000)));
    assert_eq!(section.rows().len(), 1);
    assert_eq!(section.rows()[0].kingaku, Yen::new(150_000));
    assert_eq!(section.rows()[0].tekiyou, "テスト取引1");
    assert!(section.rows()[0].bikou.contains("MF行番号: 1"));

    Ok(())
}

#[test]
fn test_other_income_threshold_is_inclusive() -> Result<()> {
    let transactions = vec![income("1", "ちょうど", 100_000), income("2", "未満", 99_999)];

    let section = aggregate_other_income(&transactions)?;

    assert_eq!(section.rows().len(), 1);
    assert_eq!(section.rows()[0].kingaku, Yen::new(100_000));
    assert_eq!(section.under_threshold_amount(), Some(Yen::new(99_999)));

    Ok(())
}

#[test]
fn test_rows_are_numbered_in_input_order() -> Result<()> {
    let transactions = vec![
        income("30", "C", 300_000),
        income("10", "A", 50_000),
        income("20", "B", 200_000),
    ];

    let section = aggregate_other_income(&transactions)?;
    let numbered: Vec<(&str, &str)> = section.rows().iter()
        .map(|row| (row.ichiren_no.as_str(), row.tekiyou.as_str()))
        .collect();

    assert_eq!(numbered, vec![("1", "C"), ("2", "B")]);

    Ok(())
}

#[test]
fn test_zero_bucket_and_null_bucket_are_distinct() -> Result<()> {
    let other = aggregate_other_income(&[income("1", "大口", 500_000)])?;
    let loans = aggregate_loan_income(&[income("2", "借入", 10_000)])?;

    assert_eq!(other.under_threshold_amount(), Some(Yen::ZERO));
    assert_eq!(loans.under_threshold_amount(), None);

    Ok(())
}

#[test]
fn test_empty_inputs_produce_empty_sections() -> Result<()> {
    let other = aggregate_other_income(&[])?;
    let loans = aggregate_loan_income(&[])?;
    let grants = aggregate_grant_income(&[])?;
    let business = aggregate_business_income(&[])?;
    let expenses = aggregate_expense(&[])?;
    let donations = aggregate_personal_donations(&[])?;
    let grant_expenditure = aggregate_grant_expenditure(&[])?;

    assert_eq!(other.total_amount(), Yen::ZERO);
    assert_eq!(other.under_threshold_amount(), Some(Yen::ZERO));
    assert_eq!(loans.under_threshold_amount(), None);
    assert_eq!(grants.under_threshold_amount(), None);
    assert_eq!(business.under_threshold_amount(), None);
    assert_eq!(expenses.under_threshold_amount(), Some(Yen::ZERO));
    assert_eq!(donations.under_threshold_amount(), Some(Yen::ZERO));
    assert_eq!(grant_expenditure.under_threshold_amount(), None);
    assert!(other.rows().is_empty() && expenses.rows().is_empty() && grant_expenditure.rows().is_empty());

    Ok(())
}

#[test]
fn test_total_invariant_holds_across_sections() -> Result<()> {
    let incomes = vec![income("1", "a", 1), income("2", "b", 99_999), income("3", "c", 100_000), income("4", "d", 7_500_000)];
    let expenses = vec![expense("5", "a", 49_999), expense("6", "b", 50_000), expense("7", "c", 3)];
    let donations = vec![donation("8", "山田太郎", 30_000), donation("9", "山田太郎", 30_000), donation("10", "佐藤花子", 50_000)];

    assert_total_invariant(&aggregate_other_income(&incomes)?)?;
    assert_total_invariant(&aggregate_loan_income(&incomes)?)?;
    assert_total_invariant(&aggregate_grant_income(&incomes)?)?;
    assert_total_invariant(&aggregate_business_income(&incomes)?)?;
    assert_total_invariant(&aggregate_expense(&expenses)?)?;
    assert_total_invariant(&aggregate_grant_expenditure(&expenses)?)?;
    assert_total_invariant(&aggregate_personal_donations(&donations)?)?;

    Ok(())
}

#[test]
fn test_section_totals_that_overflow_are_rejected() {
    // Scenario: Two rows of i64::MAX / 2 + 1 yen, whose sum is one past i64::MAX.
    // Confirms: Every aggregator reports the overflow instead of printing a wrong total.

    let half = i64::MAX / 2 + 1;
    let incomes = vec![income("1", "大口1", half), income("2", "大口2", half)];
    let expenses = vec![expense("3", "大口1", half), expense("4", "大口2", half)];
    let donations = vec![donation("5", "山田太郎", half), donation("6", "山田太郎", half)];
    let overflow = Err(AggregationError::Overflow(YenError::Overflow));

    assert_eq!(aggregate_other_income(&incomes).map(|section| section.total_amount()), overflow);
    assert_eq!(aggregate_loan_income(&incomes).map(|section| section.total_amount()), overflow);
    assert_eq!(aggregate_grant_income(&incomes).map(|section| section.total_amount()), overflow);
    assert_eq!(aggregate_business_income(&incomes).map(|section| section.total_amount()), overflow);
    assert_eq!(aggregate_expense(&expenses).map(|section| section.total_amount()), overflow);
    assert_eq!(aggregate_grant_expenditure(&expenses).map(|section| section.total_amount()), overflow);
    assert_eq!(aggregate_personal_donations(&donations).map(|section| section.total_amount()), overflow);
}

#[test]
fn test_below_threshold_bucket_that_overflows_is_rejected() {
    let transactions = vec![income("1", "返金", -1), income("2", "返金", i64::MIN)];

    let result = aggregate_other_income(&transactions);

    assert_eq!(result.map(|section| section.total_amount()), Err(AggregationError::Overflow(YenError::Overflow)));
}

#[test]
fn test_loan_income_itemizes_every_transaction() -> Result<()> {
    let transactions = vec![
        income("1", "", 1_000).with_counterpart("みらい銀行", "東京都中央区"),
        income("2", "代表者からの借入", 2_000_000),
    ];

    let section = aggregate_loan_income(&transactions)?;

    assert_eq!(section.rows().len(), 2);
    assert_eq!(section.rows()[0].lender_name, "みらい銀行");
    assert_eq!(section.rows()[1].lender_name, "代表者からの借入");
    assert_eq!(section.rows()[1].dt, date(4, 1));
    assert_eq!(section.total_amount(), Yen::new(2_001_000));

    Ok(())
}

#[test]
fn test_grant_income_keeps_branch_address() -> Result<()> {
    let transactions = vec![income("1", "交付金", 300_000).with_counterpart("本部", "  東京都  新宿区  ")];

    let section = aggregate_grant_income(&transactions)?;

    assert_eq!(section.rows()[0].branch_name, "本部");
    assert_eq!(section.rows()[0].office_address, "東京都 新宿区");

    Ok(())
}

#[test]
fn test_business_income_groups_by_category_in_first_seen_order() -> Result<()> {
    let transactions = vec![
        income("1", "機関紙 4月号", 20_000).with_category("機関紙誌の発行"),
        income("2", "セミナー", 5_000).with_category("講演会"),
        income("3", "機関紙 5月号", 30_000).with_category("機関紙誌の発行"),
        income("4", "", 1_000),
    ];

    let section = aggregate_business_income(&transactions)?;
    let rows: Vec<(&str, &str, Yen)> = section.rows().iter()
        .map(|row| (row.ichiren_no.as_str(), row.kind.as_str(), row.kingaku))
        .collect();

    assert_eq!(rows, vec![
        ("1", "機関紙誌の発行", Yen::new(50_000)),
        ("2", "講演会", Yen::new(5_000)),
        ("3", "事業収入", Yen::new(1_000)),
    ]);
    assert_eq!(section.under_threshold_amount(), None);

    Ok(())
}

#[test]
fn test_expense_threshold_is_fifty_thousand_inclusive() -> Result<()> {
    let transactions = vec![expense("1", "電気代", 50_000), expense("2", "水道代", 49_999)];

    let section = aggregate_expense(&transactions)?;

    assert_eq!(section.rows().len(), 1);
    assert_eq!(section.rows()[0].purpose, "電気代");
    assert_eq!(section.rows()[0].payee_name, "東京電力");
    assert_eq!(section.under_threshold_amount(), Some(Yen::new(49_999)));
    assert_eq!(section.total_amount(), Yen::new(99_999));

    Ok(())
}

#[test]
fn test_grant_expenditure_rejects_income_transactions() {
    let transactions = vec![expense("1", "支部交付金", 100_000), income("2", "誤登録", 1_000)];

    let result = aggregate_grant_expenditure(&transactions);

    assert_eq!(result, Err(AggregationError::Validation(ValidationError::GrantFlagOnIncome)));
}

#[test]
fn test_grant_expenditure_itemizes_small_grants() -> Result<()> {
    let transactions = vec![expense("1", "支部交付金", 1_000).with_counterpart("第一支部", "大阪府大阪市")];

    let section = aggregate_grant_expenditure(&transactions)?;

    assert_eq!(section.rows().len(), 1);
    assert_eq!(section.rows()[0].branch_name, "第一支部");
    assert_eq!(section.under_threshold_amount(), None);

    Ok(())
}

#[test]
fn test_donations_are_itemized_per_donor_yearly_total() -> Result<()> {
    let transactions = vec![
        donation("1", "山田太郎", 30_000),
        donation("2", "佐藤花子", 50_000),
        donation("3", "山田太郎", 30_000),
        donation("4", "鈴木一郎", 10_000),
    ];

    let section = aggregate_personal_donations(&transactions)?;
    let rows: Vec<(&str, &str, Yen)> = section.rows().iter()
        .map(|row| (row.ichiren_no.as_str(), row.donor_name.as_str(), row.kingaku))
        .collect();

    assert_eq!(rows, vec![
        ("1", "山田太郎", Yen::new(30_000)),
        ("2", "山田太郎", Yen::new(30_000)),
    ]);
    assert_eq!(section.under_threshold_amount(), Some(Yen::new(60_000)));
    assert_eq!(section.total_amount(), Yen::new(120_000));

    Ok(())
}

#[test]
fn test_unnamed_donations_are_not_grouped_into_one_donor() -> Result<()> {
    let anonymous = |transaction_no: &str, amount: i64| {
        TransactionRow::new(transaction_no, date(6, 1), TransactionType::Income)
            .with_credit("個人からの寄附", Decimal::from(amount))
    };
    let transactions = vec![anonymous("1", 30_000), anonymous("2", 30_000), anonymous("3", 60_000)];

    let section = aggregate_personal_donations(&transactions)?;

    assert_eq!(section.rows().len(), 1);
    assert_eq!(section.rows()[0].kingaku, Yen::new(60_000));
    assert!(section.rows()[0].donor_name.is_empty());
    assert_eq!(section.under_threshold_amount(), Some(Yen::new(60_000)));
    assert_eq!(section.total_amount(), Yen::new(120_000));

    Ok(())
}

#[test]
fn test_income_amount_prefers_credit_and_falls_back_to_debit() -> Result<()> {
    let both = TransactionRow::new("1", date(1, 1), TransactionType::Income)
        .with_debit("普通預金", Decimal::from(10))
        .with_credit("寄附", Decimal::from(20));
    let zero_credit = TransactionRow::new("2", date(1, 1), TransactionType::Income)
        .with_debit("普通預金", Decimal::from(10))
        .with_credit("寄附", Decimal::ZERO);
    let missing = TransactionRow::new("3", date(1, 1), TransactionType::Income);
    let fractional = TransactionRow::new("4", date(1, 1), TransactionType::Expense)
        .with_debit("備品", Decimal::from_str("1234.5")?);

    assert_eq!(resolve_amount(&both, AmountPriority::Credit), Yen::new(20));
    assert_eq!(resolve_amount(&both, AmountPriority::Debit), Yen::new(10));
    assert_eq!(resolve_amount(&zero_credit, AmountPriority::Credit), Yen::new(10));
    assert_eq!(resolve_amount(&missing, AmountPriority::Credit), Yen::ZERO);
    assert_eq!(resolve_amount(&fractional, AmountPriority::Debit), Yen::new(1235));

    Ok(())
}

#[test]
fn test_negative_preferred_amount_is_kept_as_a_reversal() -> Result<()> {
    let reversal = TransactionRow::new("1", date(1, 1), TransactionType::Income)
        .with_debit("普通預金", Decimal::from(5_000))
        .with_credit("雑収入", Decimal::from(-5_000));

    assert_eq!(resolve_amount(&reversal, AmountPriority::Credit), Yen::new(-5_000));

    let section = aggregate_other_income(&[income("2", "雑収入", 20_000), reversal])?;

    assert_eq!(section.under_threshold_amount(), Some(Yen::new(15_000)));
    assert_eq!(section.total_amount(), Yen::new(15_000));

    Ok(())
}

#[test]
fn test_bikou_is_suffix_only_for_empty_memo() {
    assert_eq!(build_bikou("", "42"), "MF行番号: 42");
    assert_eq!(build_bikou("   ", "42"), "MF行番号: 42");
    assert_eq!(build_bikou(" 会場費\n 前払い ", "7"), "会場費 前払い MF行番号: 7");
}

#[test]
fn test_bikou_clips_memo_then_whole_remark() {
    let long_memo = "あ".repeat(500);

    let bikou = build_bikou(&long_memo, "123");

    assert_eq!(bikou, format!("{} MF行番号: 123", "あ".repeat(160)));
    assert!(bikou.chars().count() <= BIKOU_MAX_CHARS);
}

#[test]
fn test_sanitize_collapses_whitespace_and_clips_characters() {
    assert_eq!(sanitize("  テスト \t\n サンプル  ", 100), "テスト サンプル");
    assert_eq!(sanitize("東京都千代田区", 3), "東京都");
    assert_eq!(sanitize("", 10), "");
}

#[test]
fn test_aggregation_is_deterministic() -> Result<()> {
    let transactions = vec![income("1", "テスト取引1", 150_000), income("2", "テスト取引2", 90_000)];

    assert_eq!(aggregate_other_income(&transactions)?, aggregate_other_income(&transactions)?);
    assert_eq!(
        aggregate_personal_donations(&[donation("1", "山田太郎", 60_000)])?,
        aggregate_personal_donations(&[donation("1", "山田太郎", 60_000)])?
    );

    Ok(())
}
