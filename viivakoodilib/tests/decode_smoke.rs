use chrono::NaiveDate;
use rust_decimal::Decimal;
use viivakoodilib::{decode, encode, SymbolVersion::{self, V4, V5}, ViivakoodiError};

type Row = (&'static str, SymbolVersion, &'static str, &'static str, &'static str, Option<(i32, u32, u32)>);

// код, версия, IBAN, ссылка, сумма, срок
const FIXTURES: &[Row] = &[
    ("449500094200287300001241200000000000000001234561220202", V4, "FI4950009420028730", "1234561", "124.12", Some((2022, 2, 2))),
    ("449500094200287300022225500000000000000007777776201212", V4, "FI4950009420028730", "7777776", "2222.55", Some((2020, 12, 12))),
    ("549500094200287300022225592000000000000012342345201212", V5, "FI4950009420028730", "RF9212342345", "2222.55", Some((2020, 12, 12))),
    ("549500094200287309999999992000000000000012342345201212", V5, "FI4950009420028730", "RF9212342345", "999999.99", Some((2020, 12, 12))),
    ("549500094200287300000000007000000000999999999993201212", V5, "FI4950009420028730", "RF07999999999993", "0", Some((2020, 12, 12))),
    ("479440520200360820048831500000000868516259619897100612", V4, "FI7944052020036082", "868516259619897", "4883.15", Some((2010, 6, 12))),
    ("458101710000001220004829900000000559582243294671120131", V4, "FI5810171000000122", "559582243294671", "482.99", Some((2012, 1, 31))),
    ("402500046400013020006938000000069875672083435364110724", V4, "FI0250004640001302", "69875672083435364", "693.80", Some((2011, 7, 24))),
    ("415660100015306410074445400000007758474790647489191219", V4, "FI1566010001530641", "7758474790647489", "7444.54", Some((2019, 12, 19))),
    ("416800014000502670009358500000078777679656628687000000", V4, "FI1680001400050267", "78777679656628687", "935.85", None),
    ("473313130010000580000000000000000000000000868624130809", V4, "FI7331313001000058", "868624", "0.00", Some((2013, 8, 9))),
    ("483330100011007751500002000092125374252539897737160525", V4, "FI8333010001100775", "92125374252539897737", "150000.20", Some((2016, 5, 25))),
    ("439363630020924920000010300000000000000590738390230311", V4, "FI3936363002092492", "590738390", "1.03", Some((2023, 3, 11))),
    ("492393900010033910000000200000000000000001357914991224", V4, "FI9239390001003391", "1357914", "0.02", Some((2099, 12, 24))),
    ("579440520200360820048831509000000868516259619897100612", V5, "FI7944052020036082", "RF09868516259619897", "4883.15", Some((2010, 6, 12))),
    ("558101710000001220004829906000000559582243294671100131", V5, "FI5810171000000122", "RF06559582243294671", "482.99", Some((2010, 1, 31))),
    ("502500046400013020006938061000000000698756720839110724", V5, "FI0250004640001302", "RF61698756720839", "693.80", Some((2011, 7, 24))),
    ("515660100015306410074445484000007758474790647489191219", V5, "FI1566010001530641", "RF847758474790647489", "7444.54", Some((2019, 12, 19))),
    ("516800014000502670009358560000078777679656628687000000", V5, "FI1680001400050267", "RF6078777679656628687", "935.85", None),
    ("573313130010000580000000010000000000000000868624130809", V5, "FI7331313001000058", "RF10868624", "0.0", Some((2013, 8, 9))),
    ("583330100011007751500002071092125374252539897737160525", V5, "FI8333010001100775", "RF7192125374252539897737", "150000.20", Some((2016, 5, 25))),
    ("539363630020924920000010366000000000000590738390230311", V5, "FI3936363002092492", "RF66590738390", "1.03", Some((2023, 3, 11))),
    ("592393900010033910000000295000000000000001357914991224", V5, "FI9239390001003391", "RF951357914", "0.02", Some((2099, 12, 24))),];

fn date(d: Option<(i32, u32, u32)>) -> Option<NaiveDate> {
    d.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
}

#[test]
fn decode_fixture_table() {
    for &(code, symbol, iban, reference, amount, due) in FIXTURES {
        let r = decode(code).unwrap_or_else(|e| panic!("{code}: {e}"));
        assert_eq!(r.symbol, symbol, "{code}");
        assert_eq!(r.iban, iban, "{code}");
        assert_eq!(r.reference, reference, "{code}");
        assert_eq!(r.euro_amount, Decimal::from_str_exact(amount).unwrap(), "{code}");
        assert_eq!(r.due_date, date(due), "{code}");
    }
}

#[test]
fn decoded_fields_encode_back_to_the_same_code() {
    for &(code, _, iban, reference, amount, due) in FIXTURES {
        let amount = Decimal::from_str_exact(amount).unwrap();
        let again = encode(iban, reference, amount, date(due)).unwrap();
        assert_eq!(again, code);
    }
}

#[test]
fn zero_amount_rf_reference() {
    let r = decode("549500094200287300000000007000000000999999999993201212").unwrap();
    assert_eq!(r.symbol, V5);
    assert_eq!(r.iban, "FI4950009420028730");
    assert_eq!(r.reference, "RF07999999999993");
    assert_eq!(r.euro_amount, Decimal::ZERO);
    assert_eq!(r.due_date, NaiveDate::from_ymd_opt(2020, 12, 12));
}

#[test]
fn wrong_length() {
    let msg = "Invalid length of virtuaaliviivakoodi. Must be 54 characters.";
    for code in [
        "4923939000100339100000002950000000000001357914991224",
        "49239390001003391000000029500000000000000135791499122",
        "4923939000100339100000002950000000000000013579149912244",
        "492393900010033910000000295000000000000000001357914991224",
        "",
    ] {
        assert_eq!(decode(code).unwrap_err(), ViivakoodiError::InvalidLength(msg), "{code}");
    }
}

#[test]
fn wrong_symbol() {
    let msg = "Invalid symbol version. Must be 4 or 5.";
    for code in [
        "692393900010033910000000295000000000000001357914991224",
        "392393900010033910000000295000000000000001357914991224",
    ] {
        let err = decode(code).unwrap_err();
        assert_eq!(err, ViivakoodiError::InvalidSymbol(msg));
        assert_eq!(err.to_string(), msg);
    }
}

#[test]
fn impossible_due_date() {
    let err = decode("492393900010033910000000295000000000000001357914999999").unwrap_err();
    assert!(matches!(err, ViivakoodiError::InvalidDueDate(_)));
}

#[test]
fn non_digit_columns() {
    let err = decode("4923939000100339100000002950000000000000013579149912XX").unwrap_err();
    assert_eq!(
        err,
        ViivakoodiError::InvalidDigits("Invalid virtuaaliviivakoodi. Must contain only digits.")
    );
}

#[test]
fn all_zero_domestic_reference_is_empty() {
    let code = format!("4{}", "0".repeat(53));
    let r = decode(&code).unwrap();
    assert_eq!(r.symbol, V4);
    assert_eq!(r.reference, "");
    assert_eq!(r.due_date, None);
}
