use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    f64::{ElectricCurrent, ElectricPotential, Power, TemperatureInterval, ThermodynamicTemperature},
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use super::{DeviceRatings, HotSideRatings, ThermoelectricCooler};

/// CUI Devices CP353047 ratings (`V_max` 11.8 V, `I_max` 3.5 A, `ΔT_max` 70 K).
pub(super) fn cp353047() -> ThermoelectricCooler {
    let ratings = DeviceRatings::new(
        "CP353047",
        "https://www.cuidevices.com/product/resource/cp35.pdf",
        ElectricPotential::new::<volt>(11.8),
        ElectricCurrent::new::<ampere>(3.5),
        HotSideRatings {
            at_27c: Power::new::<watt>(24.0),
            at_50c: Power::new::<watt>(26.0),
        },
        HotSideRatings {
            at_27c: TemperatureInterval::new::<delta_kelvin>(70.0),
            at_50c: TemperatureInterval::new::<delta_kelvin>(77.0),
        },
    )
    .expect("CP353047 ratings are valid");

    ThermoelectricCooler::new(ratings)
}

pub(super) fn amps(value: f64) -> ElectricCurrent {
    ElectricCurrent::new::<ampere>(value)
}

pub(super) fn temp_k(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(value)
}
