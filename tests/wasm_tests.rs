//! WASM tests using wasm_bindgen_test
//!
//! Run with: wasm-pack test --headless --chrome --features wasm

#![cfg(all(target_arch = "wasm32", feature = "wasm"))]

use js_sys::Array;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use transformatrix::wasm::WasmTransform;

fn numbers(value: &JsValue) -> Vec<f64> {
    assert!(Array::is_array(value), "expected an array");
    Array::from(value).iter().map(|v| v.as_f64().expect("number")).collect()
}

fn rows(value: &JsValue) -> Vec<Vec<f64>> {
    assert!(Array::is_array(value), "expected an array");
    Array::from(value).iter().map(|row| numbers(&row)).collect()
}

fn js_numbers(values: &[f64]) -> Array {
    values.iter().map(|&n| JsValue::from_f64(n)).collect()
}

#[wasm_bindgen_test]
fn test_new_transform_is_identity() {
    let t = WasmTransform::new();
    assert_eq!(t.to_transform_string(), "matrix(1, 0, 0, 1, 0, 0)");
    assert_eq!(t.eval(3.0, 4.0), vec![3.0, 4.0]);
}

#[wasm_bindgen_test]
fn test_chained_calls_share_state() {
    let t = WasmTransform::new();
    t.translate(JsValue::from_f64(10.0), JsValue::from_f64(0.0))
        .scale(JsValue::from_f64(2.0), JsValue::UNDEFINED);
    assert_eq!(t.eval(1.0, 0.0), vec![12.0, 0.0]);
}

#[wasm_bindgen_test]
fn test_string_arguments() {
    let t = WasmTransform::new();
    t.translate(JsValue::from_str("15px"), JsValue::from_str("400px"));
    assert_eq!(numbers(&t.to_matrix(None)), vec![1.0, 0.0, 0.0, 1.0, 15.0, 400.0]);
}

#[wasm_bindgen_test]
fn test_transform_string() {
    let t = WasmTransform::new();
    t.transform("translate(10px, 0) scale(2)");
    assert_eq!(t.to_transform_string(), "matrix(2, 0, 0, 2, 10, 0)");
    assert_eq!(
        numbers(&t.to_matrix(Some("flat".to_string()))),
        vec![2.0, 0.0, 10.0, 0.0, 2.0, 0.0, 0.0, 0.0, 1.0]
    );
}

#[wasm_bindgen_test]
fn test_apply_matrix_two_d() {
    let t = WasmTransform::new();
    let values: Array = [[1.0, 3.0, 5.0], [2.0, 4.0, 6.0], [0.0, 0.0, 1.0]]
        .iter()
        .map(|row| js_numbers(row))
        .collect();
    t.apply_matrix(values.into(), Some("2D".to_string()));
    assert_eq!(numbers(&t.to_matrix(Some("CSS".to_string()))), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[wasm_bindgen_test]
fn test_to_matrix_two_d_is_nested() {
    let t = WasmTransform::new();
    t.transform("translate(10px, 20px) scale(2)");
    assert_eq!(
        rows(&t.to_matrix(Some("2D".to_string()))),
        vec![vec![2.0, 0.0, 10.0], vec![0.0, 2.0, 20.0], vec![0.0, 0.0, 1.0]]
    );
}

#[wasm_bindgen_test]
fn test_apply_matrix_two_d_short_rows_use_identity() {
    let t = WasmTransform::new();
    let values: Array = [js_numbers(&[2.0]), js_numbers(&[])].into_iter().collect();
    t.apply_matrix(values.into(), Some("2D".to_string()));
    assert_eq!(numbers(&t.to_matrix(None)), vec![2.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
}

#[wasm_bindgen_test]
fn test_apply_matrix_css_flat_array() {
    let t = WasmTransform::new();
    t.apply_matrix(js_numbers(&[1.0, 0.0, 0.0, 1.0, 7.0, 8.0]).into(), None);
    assert_eq!(t.eval(0.0, 0.0), vec![7.0, 8.0]);
}
