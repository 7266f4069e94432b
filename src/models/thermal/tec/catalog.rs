//! Device catalogs built from published datasheet ratings.

use thiserror::Error;
use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    f64::{ElectricCurrent, ElectricPotential, Power, TemperatureInterval},
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
};

use super::{DeviceRatings, HotSideRatings, RatingsError, ThermoelectricCooler};

/// CUI Devices CP35 series datasheet.
pub const CP35_DATASHEET: &str = "https://www.cuidevices.com/product/resource/cp35.pdf";

/// Errors that can occur while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("part number {part_number} is already in the catalog")]
    DuplicatePartNumber { part_number: String },

    #[error(transparent)]
    Ratings(#[from] RatingsError),
}

/// An ordered collection of devices keyed by part number.
///
/// Part numbers are unique within a catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceCatalog {
    devices: Vec<ThermoelectricCooler>,
}

impl DeviceCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a device to the end of the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicatePartNumber`] if a device with the same
    /// part number is already present. The catalog is left unchanged.
    pub fn insert(&mut self, device: ThermoelectricCooler) -> Result<(), CatalogError> {
        if self.get(device.part_number()).is_some() {
            return Err(CatalogError::DuplicatePartNumber {
                part_number: device.part_number().to_owned(),
            });
        }
        self.devices.push(device);
        Ok(())
    }

    /// Looks up a device by exact part number.
    #[must_use]
    pub fn get(&self, part_number: &str) -> Option<&ThermoelectricCooler> {
        self.devices
            .iter()
            .find(|device| device.part_number() == part_number)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Iterates over devices in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ThermoelectricCooler> {
        self.devices.iter()
    }
}

impl<'a> IntoIterator for &'a DeviceCatalog {
    type Item = &'a ThermoelectricCooler;
    type IntoIter = std::slice::Iter<'a, ThermoelectricCooler>;

    fn into_iter(self) -> Self::IntoIter {
        self.devices.iter()
    }
}

/// Datasheet row: part number, `V_max`, `Q_max` at 27/50 °C, `ΔT_max` at 27/50 °C.
type Cp35Row = (&'static str, f64, [f64; 2], [f64; 2]);

/// All CP35 modules share `I_max = 3.5 A`.
const CP35_I_MAX: f64 = 3.5;

const CP35_ROWS: [Cp35Row; 7] = [
    ("CP35147", 2.1, [3.9, 4.3], [68.0, 75.0]),
    ("CP35247", 3.8, [7.0, 7.7], [68.0, 75.0]),
    ("CP35301547", 4.2, [7.9, 8.7], [68.0, 75.0]),
    ("CP35347", 8.6, [16.0, 17.8], [70.0, 77.0]),
    ("CP353047", 11.8, [24.0, 26.0], [70.0, 77.0]),
    ("CP35447", 15.4, [29.0, 32.0], [70.0, 77.0]),
    ("CP354047", 24.1, [49.0, 53.0], [70.0, 77.0]),
];

/// The CUI Devices CP35 series of 3.5 A modules.
///
/// ```
/// use tec_models::models::thermal::tec::catalog;
///
/// let cp35 = catalog::cp35().unwrap();
/// assert_eq!(cp35.len(), 7);
/// assert!(cp35.get("CP354047").is_some());
/// ```
///
/// # Errors
///
/// Returns a [`CatalogError`] only if the built-in ratings are inconsistent.
pub fn cp35() -> Result<DeviceCatalog, CatalogError> {
    let mut catalog = DeviceCatalog::new();

    for (part_number, v_max, [q_27, q_50], [dt_27, dt_50]) in CP35_ROWS {
        let ratings = DeviceRatings::new(
            part_number,
            CP35_DATASHEET,
            ElectricPotential::new::<volt>(v_max),
            ElectricCurrent::new::<ampere>(CP35_I_MAX),
            HotSideRatings {
                at_27c: Power::new::<watt>(q_27),
                at_50c: Power::new::<watt>(q_50),
            },
            HotSideRatings {
                at_27c: TemperatureInterval::new::<delta_kelvin>(dt_27),
                at_50c: TemperatureInterval::new::<delta_kelvin>(dt_50),
            },
        )?;
        catalog.insert(ThermoelectricCooler::new(ratings))?;
    }

    tracing::debug!(devices = catalog.len(), "loaded CP35 catalog");

    Ok(catalog)
}
