#[macro_export]
macro_rules! assert_float_eq {
  ($l : expr, $r : expr) => {
    $crate::assert_float_eq!($l, $r, 1e-5)
  };
  ($l : expr, $r : expr, $tol : expr) => {{
    let (l, r, tol): (f64, f64, f64) = ($l, $r, $tol);
    assert!((l - r).abs() < tol, "{} != {} (tolerance {})", l, r, tol);
  }};
}

/// Logger setup shared by the binaries; `RUST_LOG` overrides the `info`
/// default.
pub fn init_logger() {
  env_logger::Builder::from_env(
    env_logger::Env::default().default_filter_or("info"),
  )
  .init();
}
