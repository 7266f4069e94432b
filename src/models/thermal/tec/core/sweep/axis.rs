/// Returns `n` evenly spaced values from `start` to `end`, both inclusive.
///
/// The last value is exactly `end`. A single point yields `[start]` and zero
/// points yield an empty vector.
///
/// ```
/// use tec_models::models::thermal::tec::linspace;
///
/// assert_eq!(linspace(1.0, 5.0, 5), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
#[must_use]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let step = (end - start) / (n - 1) as f64;

            let mut points: Vec<f64> = (0..n)
                .map(|i| {
                    #[allow(clippy::cast_precision_loss)]
                    let i = i as f64;
                    start + i * step
                })
                .collect();
            points[n - 1] = end;
            points
        }
    }
}
