/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use crate::Float;
use calendar::N_MONTHS;
use model::EnergyCarrier;
use serde::Serialize;
use std::io::{self, Write};

/// The number of [`EndUseCategory`] variants
pub const N_CATEGORIES: usize = 8;

/// What the energy is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EndUseCategory {
    /// Space heating
    Heating,
    /// Space cooling
    Cooling,
    /// Lights inside the building
    InteriorLights,
    /// Lights outside the building
    ExteriorLights,
    /// Ventilation fans
    Fans,
    /// Circulation pumps of the heating and cooling systems
    Pumps,
    /// Plug loads
    InteriorEquipment,
    /// Domestic hot water
    WaterSystems,
}

impl EndUseCategory {
    /// Every category, in reporting order
    pub const ALL: [EndUseCategory; N_CATEGORIES] = [
        EndUseCategory::Heating,
        EndUseCategory::Cooling,
        EndUseCategory::InteriorLights,
        EndUseCategory::ExteriorLights,
        EndUseCategory::Fans,
        EndUseCategory::Pumps,
        EndUseCategory::InteriorEquipment,
        EndUseCategory::WaterSystems,
    ];

    /// The position of the category in [`EndUseCategory::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            Self::Heating => "Heating",
            Self::Cooling => "Cooling",
            Self::InteriorLights => "InteriorLights",
            Self::ExteriorLights => "ExteriorLights",
            Self::Fans => "Fans",
            Self::Pumps => "Pumps",
            Self::InteriorEquipment => "InteriorEquipment",
            Self::WaterSystems => "WaterSystems",
        }
    }
}

fn carrier_name(carrier: EnergyCarrier) -> &'static str {
    match carrier {
        EnergyCarrier::Electricity => "Electricity",
        EnergyCarrier::Gas => "Gas",
    }
}

const CARRIERS: [EnergyCarrier; 2] = [EnergyCarrier::Electricity, EnergyCarrier::Gas];

/// The energy (kWh/m2) used during one month, by carrier and category
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct EndUseSnapshot {
    /// Electricity used by each [`EndUseCategory`]
    pub electricity: [Float; N_CATEGORIES],

    /// Gas used by each [`EndUseCategory`]
    pub gas: [Float; N_CATEGORIES],
}

impl EndUseSnapshot {
    fn cells(&self, carrier: EnergyCarrier) -> &[Float; N_CATEGORIES] {
        match carrier {
            EnergyCarrier::Electricity => &self.electricity,
            EnergyCarrier::Gas => &self.gas,
        }
    }

    /// Adds `value` to a cell
    pub fn add(&mut self, carrier: EnergyCarrier, category: EndUseCategory, value: Float) {
        let cells = match carrier {
            EnergyCarrier::Electricity => &mut self.electricity,
            EnergyCarrier::Gas => &mut self.gas,
        };
        cells[category.index()] += value;
    }

    /// Gets the value of a cell
    pub fn get(&self, carrier: EnergyCarrier, category: EndUseCategory) -> Float {
        self.cells(carrier)[category.index()]
    }

    /// Adds up every cell
    pub fn total(&self) -> Float {
        self.iter().map(|(_, _, v)| v).sum()
    }

    /// Iterates over all cells, electricity first
    pub fn iter(&self) -> impl Iterator<Item = (EnergyCarrier, EndUseCategory, Float)> + '_ {
        CARRIERS.into_iter().flat_map(move |carrier| {
            EndUseCategory::ALL
                .into_iter()
                .map(move |category| (carrier, category, self.get(carrier, category)))
        })
    }
}

/// The results of a simulation: one [`EndUseSnapshot`] per month
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    /// The energy used each month, January first
    pub monthly: [EndUseSnapshot; N_MONTHS],
}

impl SimulationResult {
    /// The energy used during the whole year, adding every
    /// carrier and category (kWh/m2)
    pub fn total_energy_use(&self) -> Float {
        self.monthly.iter().map(|s| s.total()).sum()
    }

    /// The energy used during month `month` (0 is January)
    pub fn monthly_total(&self, month: usize) -> Float {
        self.monthly[month].total()
    }

    /// The energy of a certain carrier and category used during the year
    pub fn total_by(&self, carrier: EnergyCarrier, category: EndUseCategory) -> Float {
        self.monthly.iter().map(|s| s.get(carrier, category)).sum()
    }

    /// Writes the results as CSV: one row per month, one column
    /// per cell, and a final `Total` row.
    pub fn write_csv<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "Month")?;
        for carrier in CARRIERS {
            for category in EndUseCategory::ALL {
                write!(writer, ",{}:{}", carrier_name(carrier), category.name())?;
            }
        }
        writeln!(writer)?;

        for (m, snapshot) in self.monthly.iter().enumerate() {
            write!(writer, "{}", m + 1)?;
            for (_, _, v) in snapshot.iter() {
                write!(writer, ",{:.6}", v)?;
            }
            writeln!(writer)?;
        }

        write!(writer, "Total")?;
        for carrier in CARRIERS {
            for category in EndUseCategory::ALL {
                write!(writer, ",{:.6}", self.total_by(carrier, category))?;
            }
        }
        writeln!(writer)?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validate::assert_close;

    #[test]
    fn test_snapshot() {
        let mut s = EndUseSnapshot::default();
        s.add(EnergyCarrier::Gas, EndUseCategory::Heating, 2.);
        s.add(EnergyCarrier::Gas, EndUseCategory::Heating, 1.);
        s.add(EnergyCarrier::Electricity, EndUseCategory::Fans, 0.5);
        assert_eq!(s.get(EnergyCarrier::Gas, EndUseCategory::Heating), 3.);
        assert_eq!(s.get(EnergyCarrier::Electricity, EndUseCategory::Heating), 0.);
        assert_close!(s.total(), 3.5, 1e-12);
        assert_eq!(s.iter().count(), 16);
    }

    #[test]
    fn test_category_order() {
        for (i, c) in EndUseCategory::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
        assert_eq!(EndUseCategory::WaterSystems.name(), "WaterSystems");
    }

    #[test]
    fn test_result_totals() {
        let mut result = SimulationResult::default();
        for (m, s) in result.monthly.iter_mut().enumerate() {
            s.add(EnergyCarrier::Electricity, EndUseCategory::Cooling, m as Float);
            s.add(EnergyCarrier::Gas, EndUseCategory::WaterSystems, 1.);
        }
        assert_close!(result.total_energy_use(), 66. + 12., 1e-12);
        assert_close!(result.monthly_total(3), 4., 1e-12);
        assert_close!(
            result.total_by(EnergyCarrier::Electricity, EndUseCategory::Cooling),
            66.,
            1e-12
        );
    }

    #[test]
    fn test_csv() -> Result<(), String> {
        let mut result = SimulationResult::default();
        result.monthly[0].add(EnergyCarrier::Electricity, EndUseCategory::Heating, 1.5);

        let mut buf: Vec<u8> = Vec::new();
        result.write_csv(&mut buf).map_err(|e| e.to_string())?;
        let text = String::from_utf8(buf).map_err(|e| e.to_string())?;
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 14);
        assert!(lines[0].starts_with("Month,Electricity:Heating,Electricity:Cooling"));
        assert!(lines[0].ends_with("Gas:WaterSystems"));
        assert!(lines[1].starts_with("1,1.500000,0.000000"));
        assert!(lines[13].starts_with("Total,1.500000"));
        assert_eq!(lines[12].split(',').count(), 17);
        Ok(())
    }

    #[test]
    fn test_serialize() -> Result<(), serde_json::Error> {
        let mut result = SimulationResult::default();
        result.monthly[11].add(EnergyCarrier::Gas, EndUseCategory::Pumps, 2.);
        let json = serde_json::to_value(&result)?;
        assert_eq!(json["monthly"].as_array().map(|a| a.len()), Some(12));
        assert_eq!(json["monthly"][11]["gas"][5], 2.);
        Ok(())
    }
}
