//! Fallible classifiers and handlers: caller errors pass through untouched.

use keyswitch::{
    BoxError, DispatchError, build_table, pair, try_build_and_resolve, try_resolve,
    testing::CountingHandler,
};

mod common;
use common::{AppError, band};

fn parse_band(raw: &str) -> Result<String, AppError> {
    raw.trim()
        .parse::<i32>()
        .map(|n| band(n).to_string())
        .map_err(|_| AppError::Parse(raw.to_string()))
}

fn registrations() -> Vec<keyswitch::Registration<'static, String, Result<u32, AppError>>> {
    vec![
        pair("low".to_string(), || Ok(10)),
        pair("mid".to_string(), || Err(AppError::Handler("mid is offline"))),
    ]
}

#[test]
fn test_handler_success() {
    assert_eq!(try_build_and_resolve(parse_band, "1", registrations()), Ok(10));
}

#[test]
fn test_handler_error_returned_verbatim() {
    assert_eq!(
        try_build_and_resolve(parse_band, "5", registrations()),
        Err(AppError::Handler("mid is offline"))
    );
}

#[test]
fn test_classifier_error_returned_verbatim() {
    let counter = CountingHandler::new();
    let result = try_build_and_resolve(
        parse_band,
        "five",
        [pair("low".to_string(), {
            let handler = counter.returning(());
            move || {
                handler();
                Ok::<_, AppError>(1)
            }
        })],
    );

    assert_eq!(result, Err(AppError::Parse("five".to_string())));
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_unmatched_case_converted_into_caller_error() {
    assert_eq!(
        try_build_and_resolve(parse_band, "8", registrations()),
        Err(AppError::Dispatch(DispatchError::UnmatchedCase("high".to_string())))
    );
}

#[test]
fn test_try_resolve_with_boxed_errors() {
    let table = build_table([
        pair("ok", || Ok::<_, BoxError>("fine")),
        pair("io", || Err::<&str, BoxError>("disk full".into())),
    ]);

    let result = try_resolve(
        table,
        |name: &str| -> Result<&'static str, BoxError> {
            match name {
                "ok" => Ok("ok"),
                "io" => Ok("io"),
                other => Err(format!("unknown input {other}").into()),
            }
        },
        "io",
    );

    assert_eq!(result.unwrap_err().to_string(), "disk full");
}

#[test]
fn test_boxed_unmatched_keeps_case_name() {
    let table = build_table([pair("ok".to_string(), || Ok::<_, BoxError>(()))]);

    let err = try_resolve(table, |()| Ok::<_, BoxError>("other".to_string()), ()).unwrap_err();

    assert_eq!(err.to_string(), "unmatched case: \"other\"");
    let dispatch = err.downcast_ref::<DispatchError<String>>().unwrap();
    assert!(dispatch.is_unmatched());
}
