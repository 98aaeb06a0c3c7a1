use crate::error::FieldError;
use crate::graph::Literal;
use crate::vocab::xsd;
use chrono::NaiveDate;

/// Parses a GTFS `YYYYMMDD` date
///
/// Exactly eight ASCII digits forming a calendar date are accepted.
/// chrono alone would take shorter fields such as `2020229`
pub fn parse_date(s: &str) -> Result<NaiveDate, FieldError> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::InvalidDate(s.to_owned()));
    }
    NaiveDate::parse_from_str(s, "%Y%m%d").map_err(|_| FieldError::InvalidDate(s.to_owned()))
}

/// Parses a GTFS date and renders it as an ISO 8601 `xsd:date` literal
pub fn date_literal(s: &str) -> Result<Literal, FieldError> {
    parse_date(s).map(|date| Literal::typed(date.format("%Y-%m-%d").to_string(), xsd::DATE))
}

#[test]
fn test_parse_date() {
    assert_eq!(
        NaiveDate::from_ymd_opt(2020, 2, 29),
        parse_date("20200229").ok()
    );
    assert_eq!(
        Err(FieldError::InvalidDate("20210229".to_owned())),
        parse_date("20210229")
    );
    for invalid in ["2020229", "202002290", "2020-02-29", "2020022a", "", "20201301"] {
        assert!(parse_date(invalid).is_err(), "{invalid} should be rejected");
    }
}

#[test]
fn test_date_literal() {
    let literal = date_literal("20200229").unwrap();
    assert_eq!("2020-02-29", literal.value);
    assert_eq!(xsd::DATE, literal.datatype.as_str());
}
