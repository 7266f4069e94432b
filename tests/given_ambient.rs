//! Hot-side solves that invert the sweep's ambient estimate.

use approx::assert_relative_eq;
use tec_models::{
    models::thermal::tec::{GivenAmbientConfig, Sweep, catalog},
    support::{constraint::NonNegative, units::kelvin_per_watt},
};
use uom::si::thermodynamic_temperature::kelvin;

#[test]
fn recovers_hot_side_of_every_sweep_point() {
    let cp35 = catalog::cp35().unwrap();
    let device = cp35.get("CP35347").unwrap();
    let sweep = Sweep::datasheet_characterization();
    let results = sweep.evaluate(device).unwrap();

    for point in results.points().step_by(7) {
        let solution = device
            .given_ambient(
                point.conditions.current,
                point.conditions.t_cold,
                point.ambient_temperature,
                NonNegative::new(kelvin_per_watt(0.5)).unwrap(),
                GivenAmbientConfig::default(),
            )
            .unwrap();

        assert_relative_eq!(
            solution.t_hot.get::<kelvin>(),
            point.conditions.t_hot.get::<kelvin>(),
            epsilon = 1e-6
        );
    }
}
