//! FFI Integration Tests for DeterministicRng
//!
//! Tests the Python interface: error mapping to Python exceptions, state
//! export, and save/load continuity through text and bytes.

#[cfg(feature = "pyo3")]
mod ffi_tests {
    use pyo3::exceptions::{PyEOFError, PyValueError};
    use pyo3::prelude::*;
    use pyo3::types::PyBytes;
    use resumable_rng::ffi::generator::PyDeterministicRng;

    /// Draw a fixed mixed script through Python method calls
    fn draw_script(rng: &Bound<'_, PyAny>) -> Vec<f64> {
        let mut values = Vec::new();
        for _ in 0..10 {
            let a: i32 = rng.call_method0("next_int").unwrap().extract().unwrap();
            let b: i32 = rng.call_method1("next_int_below", (100,)).unwrap().extract().unwrap();
            let c: i32 = rng
                .call_method1("next_int_between", (-50, 50))
                .unwrap()
                .extract()
                .unwrap();
            let d: f64 = rng.call_method0("next_float").unwrap().extract().unwrap();
            values.extend([a as f64, b as f64, c as f64, d]);
        }
        values
    }

    #[test]
    fn test_ffi_export_state_tuple() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let cls = py.get_type_bound::<PyDeterministicRng>();
            let rng = cls.call1((7,)).expect("Failed to create generator");

            let state: (i32, i32) = rng.call_method0("export_state").unwrap().extract().unwrap();
            assert_eq!(state, (7, 0));

            rng.call_method0("next_int").unwrap();
            rng.call_method0("next_float").unwrap();

            let state: (i32, i32) = rng.call_method0("export_state").unwrap().extract().unwrap();
            assert_eq!(state, (7, 2));

            let draw_count: i32 = rng.getattr("draw_count").unwrap().extract().unwrap();
            assert_eq!(draw_count, 2);
        });
    }

    #[test]
    fn test_ffi_text_round_trip_continues_sequence() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let cls = py.get_type_bound::<PyDeterministicRng>();
            let rng = cls.call1((12345,)).unwrap();
            draw_script(&rng);

            let text: String = rng.call_method0("to_text").unwrap().extract().unwrap();
            assert_eq!(text, r#"{"Seed":12345,"CallCount":40}"#);

            let resumed = cls.call_method1("from_text", (text,)).unwrap();
            assert_eq!(draw_script(&rng), draw_script(&resumed));
        });
    }

    #[test]
    fn test_ffi_bytes_round_trip_continues_sequence() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let cls = py.get_type_bound::<PyDeterministicRng>();
            let rng = cls.call1((-99,)).unwrap();
            draw_script(&rng);

            let data = rng
                .call_method0("to_bytes")
                .unwrap()
                .downcast_into::<PyBytes>()
                .unwrap();
            assert_eq!(data.as_bytes().len(), 8);

            let resumed = cls.call_method1("from_bytes", (data,)).unwrap();
            assert_eq!(draw_script(&rng), draw_script(&resumed));
        });
    }

    #[test]
    fn test_ffi_none_payloads_raise_value_error() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let cls = py.get_type_bound::<PyDeterministicRng>();

            let err = cls.call_method1("from_text", (py.None(),)).unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py), "from_text(None): {}", err);

            let err = cls.call_method1("from_bytes", (py.None(),)).unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py), "from_bytes(None): {}", err);
        });
    }

    #[test]
    fn test_ffi_short_bytes_raise_eof_error() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let cls = py.get_type_bound::<PyDeterministicRng>();

            for len in 1..8 {
                let data = PyBytes::new_bound(py, &vec![0u8; len]);
                let err = cls.call_method1("from_bytes", (data,)).unwrap_err();
                assert!(
                    err.is_instance_of::<PyEOFError>(py),
                    "{} bytes should raise EOFError, got {}",
                    len,
                    err
                );
            }
        });
    }

    #[test]
    fn test_ffi_invalid_arguments_raise_value_error() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let cls = py.get_type_bound::<PyDeterministicRng>();

            let err = cls.call_method1("restore", (1, -1)).unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));

            let err = cls.call_method1("from_text", ("garbage",)).unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));

            let rng = cls.call1((1,)).unwrap();
            let err = rng.call_method1("next_int_below", (-1,)).unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));
            let err = rng.call_method1("next_int_between", (5, 4)).unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));

            let draw_count: i32 = rng.getattr("draw_count").unwrap().extract().unwrap();
            assert_eq!(draw_count, 0, "Rejected draws must not advance");
        });
    }

    #[test]
    fn test_ffi_restore_matches_uninterrupted() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let cls = py.get_type_bound::<PyDeterministicRng>();

            let uninterrupted = cls.call1((12345,)).unwrap();
            for _ in 0..2 {
                uninterrupted.call_method1("next_int_below", (100,)).unwrap();
            }
            let expected: i32 = uninterrupted
                .call_method1("next_int_below", (100,))
                .unwrap()
                .extract()
                .unwrap();

            let resumed = cls.call_method1("restore", (12345, 2)).unwrap();
            let actual: i32 = resumed
                .call_method1("next_int_below", (100,))
                .unwrap()
                .extract()
                .unwrap();

            assert_eq!(actual, expected);
        });
    }
}
