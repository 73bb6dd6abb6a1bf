//! WASM API module for browser/JS interop
//!
//! Exposes the composition engine to JavaScript with the conventional
//! camelCase method names. Arguments are `JsValue`s so callers can pass
//! numbers or unit-suffixed strings (`"15px"`, `"85deg"`).

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::transforms::{Arg, MatrixLayout, MatrixOrder, MatrixValues, Transformer};

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Convert a JS value into an engine argument.
fn to_arg(value: &JsValue) -> Arg {
    if let Some(n) = value.as_f64() {
        Arg::Number(n)
    } else if let Some(s) = value.as_string() {
        Arg::Text(s)
    } else {
        Arg::Missing
    }
}

/// Read a JS array into arguments. Anything that is not an array yields no
/// entries, so every matrix entry takes its identity default.
fn to_args(value: &JsValue) -> Vec<Arg> {
    if Array::is_array(value) {
        Array::from(value).iter().map(|v| to_arg(&v)).collect()
    } else {
        Vec::new()
    }
}

/// Read `number[][]` rows. A row that is not an array counts as empty.
fn to_rows(value: &JsValue) -> Vec<Vec<Arg>> {
    if Array::is_array(value) {
        Array::from(value).iter().map(|row| to_args(&row)).collect()
    } else {
        Vec::new()
    }
}

fn number_array(values: &[f64]) -> Array {
    values.iter().map(|&n| JsValue::from_f64(n)).collect()
}

/// Build the JS shape of a layout: `number[][]` for 2D, `number[]` otherwise.
fn layout_to_js(layout: &MatrixLayout) -> JsValue {
    match layout {
        MatrixLayout::TwoD(rows) => rows.iter().map(|row| number_array(row)).collect::<Array>().into(),
        other => number_array(&other.values()).into(),
    }
}

/// Resolve an optional order name; unknown names fall back to CSS order.
fn resolve_order(order: Option<String>) -> MatrixOrder {
    order.and_then(|o| o.parse().ok()).unwrap_or_default()
}

/// A transform accumulator.
///
/// Mutating methods return a handle to the same engine, so calls chain:
/// `new Transform().translate(10, 0).scale(2)`.
#[wasm_bindgen(js_name = Transform)]
#[derive(Clone, Default)]
pub struct WasmTransform {
    inner: Rc<RefCell<Transformer>>,
}

impl WasmTransform {
    /// Run `f` on the shared engine and hand back another handle to it.
    fn with(&self, f: impl FnOnce(&mut Transformer)) -> WasmTransform {
        f(&mut self.inner.borrow_mut());
        self.clone()
    }
}

#[wasm_bindgen(js_class = Transform)]
impl WasmTransform {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmTransform {
        WasmTransform::default()
    }

    pub fn translate(&self, tx: JsValue, ty: JsValue) -> WasmTransform {
        self.with(|t| {
            t.translate(to_arg(&tx), to_arg(&ty));
        })
    }

    pub fn scale(&self, sx: JsValue, sy: JsValue) -> WasmTransform {
        self.with(|t| {
            t.scale_xy(to_arg(&sx), to_arg(&sy));
        })
    }

    pub fn rotate(&self, angle: JsValue, x: JsValue, y: JsValue) -> WasmTransform {
        self.with(|t| {
            t.rotate_about(to_arg(&angle), to_arg(&x), to_arg(&y));
        })
    }

    #[wasm_bindgen(js_name = skewX)]
    pub fn skew_x(&self, degrees: JsValue) -> WasmTransform {
        self.with(|t| {
            t.skew_x(to_arg(&degrees));
        })
    }

    #[wasm_bindgen(js_name = skewY)]
    pub fn skew_y(&self, degrees: JsValue) -> WasmTransform {
        self.with(|t| {
            t.skew_y(to_arg(&degrees));
        })
    }

    /// Apply a raw matrix. `order` is `"CSS"` (default), `"2D"` or `"flat"`.
    /// 2D values are an array of rows; the other orders take a flat array.
    #[wasm_bindgen(js_name = applyMatrix)]
    pub fn apply_matrix(&self, values: JsValue, order: Option<String>) -> WasmTransform {
        let values = match resolve_order(order) {
            MatrixOrder::TwoD => MatrixValues::TwoD(to_rows(&values)),
            order => MatrixValues::from_args(order, to_args(&values)),
        };
        self.with(|t| {
            t.apply_matrix(values);
        })
    }

    /// Compose a CSS/SVG transform string.
    pub fn transform(&self, css: &str) -> WasmTransform {
        self.with(|t| {
            t.transform(css);
        })
    }

    /// Map a point, returning `[x, y]`.
    pub fn eval(&self, x: f64, y: f64) -> Vec<f64> {
        let (x, y) = self.inner.borrow().eval(x, y);
        vec![x, y]
    }

    /// Export the matrix: `number[][]` for `"2D"`, `number[]` otherwise.
    #[wasm_bindgen(js_name = toMatrix)]
    pub fn to_matrix(&self, order: Option<String>) -> JsValue {
        layout_to_js(&self.inner.borrow().to_matrix(resolve_order(order)))
    }

    #[wasm_bindgen(js_name = toTransformString)]
    pub fn to_transform_string(&self) -> String {
        self.inner.borrow().to_transform_string()
    }
}
