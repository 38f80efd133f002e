use crate::dashboards::common::{ChartPoint, StatTile};
use crate::shared::summary::{share_of_total, sum_by};
use serde::{Deserialize, Serialize};

/// Reporting period of the Analytics page. Selecting one does not reshape the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportPeriod {
    Weekly,
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl ReportPeriod {
    pub fn all() -> &'static [ReportPeriod] {
        &[
            ReportPeriod::Weekly,
            ReportPeriod::Monthly,
            ReportPeriod::Quarterly,
            ReportPeriod::Yearly,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            ReportPeriod::Weekly => "weekly",
            ReportPeriod::Monthly => "monthly",
            ReportPeriod::Quarterly => "quarterly",
            ReportPeriod::Yearly => "yearly",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportPeriod::Weekly => "Weekly",
            ReportPeriod::Monthly => "Monthly",
            ReportPeriod::Quarterly => "Quarterly",
            ReportPeriod::Yearly => "Yearly",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.code() == code)
    }
}

/// Monthly procurement volume with the savings achieved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumePoint {
    pub name: String,
    pub value: f64,
    pub savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpend {
    pub name: String,
    pub value: f64,
}

/// Scorecard row; every score is a percentage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierPerformance {
    pub name: String,
    pub on_time: f64,
    pub quality: f64,
    pub cost: f64,
    pub orders: u32,
}

/// Content of the Analytics page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub kpis: Vec<StatTile>,
    pub procurement_volume: Vec<VolumePoint>,
    /// On-time delivery rate per quarter
    pub supplier_on_time: Vec<ChartPoint>,
    pub category_spend: Vec<CategorySpend>,
    pub top_suppliers: Vec<SupplierPerformance>,
}

impl AnalyticsReport {
    pub fn volume_series(&self) -> Vec<ChartPoint> {
        self.procurement_volume
            .iter()
            .map(|p| ChartPoint::new(p.name.clone(), p.value))
            .collect()
    }

    /// Each category with its share of total spend, one decimal.
    pub fn category_shares(&self) -> Vec<(&CategorySpend, f64)> {
        let total = sum_by(&self.category_spend, |c| c.value);
        self.category_spend
            .iter()
            .map(|c| (c, share_of_total(c.value, total)))
            .collect()
    }

    pub fn total_savings(&self) -> f64 {
        sum_by(&self.procurement_volume, |p| p.savings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(categories: &[(&str, f64)]) -> AnalyticsReport {
        AnalyticsReport {
            kpis: vec![],
            procurement_volume: vec![
                VolumePoint { name: "Jan".into(), value: 85_000.0, savings: 12_000.0 },
                VolumePoint { name: "Feb".into(), value: 92_000.0, savings: 14_500.0 },
            ],
            supplier_on_time: vec![],
            category_spend: categories
                .iter()
                .map(|(n, v)| CategorySpend { name: n.to_string(), value: *v })
                .collect(),
            top_suppliers: vec![],
        }
    }

    #[test]
    fn test_category_shares() {
        let r = report(&[
            ("CNC Machining", 285_000.0),
            ("Steel Fabrication", 235_000.0),
            ("Injection Molding", 158_000.0),
            ("Assembly", 125_000.0),
            ("Quality Control", 74_000.0),
        ]);
        let shares: Vec<f64> = r.category_shares().iter().map(|(_, s)| *s).collect();
        assert_eq!(shares, vec![32.5, 26.8, 18.0, 14.3, 8.4]);
    }

    #[test]
    fn test_empty_categories_have_no_shares() {
        assert!(report(&[]).category_shares().is_empty());
        let zero = report(&[("A", 0.0)]);
        assert_eq!(zero.category_shares()[0].1, 0.0);
    }

    #[test]
    fn test_volume_series_and_savings() {
        let r = report(&[]);
        assert_eq!(r.volume_series()[1], ChartPoint::new("Feb", 92_000.0));
        assert_eq!(r.total_savings(), 26_500.0);
    }

    #[test]
    fn test_period_codes() {
        assert_eq!(ReportPeriod::from_code("quarterly"), Some(ReportPeriod::Quarterly));
        assert_eq!(ReportPeriod::from_code("daily"), None);
        assert_eq!(ReportPeriod::default(), ReportPeriod::Monthly);
    }
}
