use serde::{Deserialize, Serialize};

/// How many regions the ranked filters keep.
pub const RANKED_REGION_COUNT: usize = 5;

/// Registry totals for one administrative region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub id: u32,
    pub name: String,
    pub businesses: u64,
    /// Compliance rate in percent, 0..=100.
    pub compliance: u8,
    /// Revenue in whole currency units.
    pub revenue_value: u64,
}

impl Region {
    pub fn compliance_tone(&self) -> ComplianceTone {
        ComplianceTone::for_rate(self.compliance)
    }
}

/// Color band for a compliance bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplianceTone {
    High,
    Medium,
    Low,
}

impl ComplianceTone {
    /// Above 70 is high, above 60 medium, anything else low.
    pub fn for_rate(rate: u8) -> Self {
        if rate > 70 {
            ComplianceTone::High
        } else if rate > 60 {
            ComplianceTone::Medium
        } else {
            ComplianceTone::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceTone::High => "high",
            ComplianceTone::Medium => "medium",
            ComplianceTone::Low => "low",
        }
    }
}

/// Table or chart rendering of the same region list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Table,
    Chart,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Table => "table",
            ViewMode::Chart => "chart",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Table => "Table",
            ViewMode::Chart => "Chart",
        }
    }
}

/// Region subset selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionFilter {
    #[default]
    All,
    /// Highest business counts first.
    Top,
    /// Lowest business counts first.
    Bottom,
}

/// All filters in display order.
pub const ALL_REGION_FILTERS: &[RegionFilter] =
    &[RegionFilter::All, RegionFilter::Top, RegionFilter::Bottom];

impl RegionFilter {
    /// Key used as the `<option>` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionFilter::All => "all",
            RegionFilter::Top => "top",
            RegionFilter::Bottom => "bottom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RegionFilter::All => "All Regions",
            RegionFilter::Top => "Top 5 Regions",
            RegionFilter::Bottom => "Bottom 5 Regions",
        }
    }

    /// Parse an option value, falling back to `All`.
    pub fn from_key(s: &str) -> Self {
        match s {
            "top" => RegionFilter::Top,
            "bottom" => RegionFilter::Bottom,
            _ => RegionFilter::All,
        }
    }
}

/// Read-only view of `regions` under `filter`.
///
/// `All` keeps input order. The ranked filters sort by business count (stable,
/// so ties keep input order) and keep [`RANKED_REGION_COUNT`] entries.
pub fn project(regions: &[Region], filter: RegionFilter) -> Vec<&Region> {
    let mut view: Vec<&Region> = regions.iter().collect();
    match filter {
        RegionFilter::All => return view,
        RegionFilter::Top => view.sort_by(|a, b| b.businesses.cmp(&a.businesses)),
        RegionFilter::Bottom => view.sort_by(|a, b| a.businesses.cmp(&b.businesses)),
    }
    view.truncate(RANKED_REGION_COUNT);
    view
}

/// Round `value` up to 1, 2 or 5 times a power of ten, for chart axes.
pub fn nice_ceiling(value: u64) -> u64 {
    if value == 0 {
        return 1;
    }
    let mut magnitude = 1u64;
    while let Some(next) = magnitude.checked_mul(10).filter(|next| *next <= value) {
        magnitude = next;
    }
    for step in [1, 2, 5, 10] {
        let candidate = magnitude.saturating_mul(step);
        if candidate >= value {
            return candidate;
        }
    }
    u64::MAX
}

/// Label value of gridline `step` out of `steps` on an axis topping out at
/// `axis_max`.
pub fn axis_tick(axis_max: u64, step: u64, steps: u64) -> u64 {
    if steps == 0 {
        return 0;
    }
    let scaled = u128::from(axis_max) * u128::from(step) / u128::from(steps);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

/// Bar height in chart units for `value` on an axis topping out at `axis_max`.
pub fn bar_height(value: u64, axis_max: u64, height: f64) -> f64 {
    if axis_max == 0 {
        return 0.0;
    }
    (value as f64 / axis_max as f64).min(1.0) * height
}
