// File: crates/tally-core/src/dashboard.rs
// Summary: Report dashboard: six chart slots bound to fixed surface ids, filled from the visualization payload.

use serde::Deserialize;

use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::host::Host;
use crate::instance::{render_bar_chart, render_donut_chart, render_line_chart, ChartSlot};
use crate::series::Series;

pub const CHART_DEPT: &str = "chartDept";
pub const CHART_SPECIALTY: &str = "chartSpecialty";
pub const CHART_DRUG_GROUP: &str = "chartDrugGroup";
pub const CHART_DOCTOR: &str = "chartDoctor";
pub const CHART_SEVERITY: &str = "chartSeverity";
pub const CHART_MONTH: &str = "chartMonth";

/// Every surface id the dashboard draws into.
pub const SURFACE_IDS: [&str; 6] =
    [CHART_DEPT, CHART_SPECIALTY, CHART_DRUG_GROUP, CHART_DOCTOR, CHART_SEVERITY, CHART_MONTH];

/// The `charts` object of the visualization payload; absent series are empty.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardData {
    pub by_department: Series,
    pub by_specialty: Series,
    pub by_drug_group: Series,
    pub by_doctor: Series,
    pub by_severity: Series,
    pub by_month: Series,
}

/// Whole visualization response; only the chart series matter here.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Visualization {
    pub charts: DashboardData,
}

impl DashboardData {
    /// Accepts either the full response (`{"charts": {...}}`) or the bare `charts` object.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        if value.get("charts").is_some() {
            Ok(serde_json::from_value::<Visualization>(value)?.charts)
        } else {
            serde_json::from_value(value)
        }
    }
}

pub struct Dashboard {
    host: Host,
    dept: ChartSlot,
    specialty: ChartSlot,
    drug_group: ChartSlot,
    doctor: ChartSlot,
    severity: ChartSlot,
    month: ChartSlot,
}

impl Dashboard {
    pub fn new(host: Host) -> Self {
        Self {
            host,
            dept: ChartSlot::new(),
            specialty: ChartSlot::new(),
            drug_group: ChartSlot::new(),
            doctor: ChartSlot::new(),
            severity: ChartSlot::new(),
            month: ChartSlot::new(),
        }
    }

    /// Replace all six charts with ones drawn from `data`; old instances are disposed first.
    pub fn load(&mut self, data: &DashboardData) -> Result<(), ChartError> {
        let h = &self.host;
        let vbar = ChartConfig::vertical_bar();
        let hbar = ChartConfig::horizontal_bar();

        // dispose before drawing so two instances never observe one surface
        self.dept.clear();
        self.dept.replace(render_bar_chart(h, CHART_DEPT, data.by_department.clone(), vbar)?);
        self.specialty.clear();
        self.specialty.replace(render_bar_chart(h, CHART_SPECIALTY, data.by_specialty.clone(), vbar)?);
        self.drug_group.clear();
        self.drug_group.replace(render_bar_chart(h, CHART_DRUG_GROUP, data.by_drug_group.clone(), hbar)?);
        self.doctor.clear();
        self.doctor.replace(render_bar_chart(h, CHART_DOCTOR, data.by_doctor.clone(), hbar)?);
        self.severity.clear();
        self.severity.replace(render_donut_chart(h, CHART_SEVERITY, data.by_severity.clone())?);
        self.month.clear();
        self.month.replace(render_line_chart(h, CHART_MONTH, data.by_month.clone(), ChartConfig::line())?);
        Ok(())
    }

    pub fn slots(&self) -> [&ChartSlot; 6] {
        [&self.dept, &self.specialty, &self.drug_group, &self.doctor, &self.severity, &self.month]
    }

    pub fn dispose(&mut self) {
        for slot in [
            &mut self.dept,
            &mut self.specialty,
            &mut self.drug_group,
            &mut self.doctor,
            &mut self.severity,
            &mut self.month,
        ] {
            slot.clear();
        }
    }
}
