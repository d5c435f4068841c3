//! Display data for the pitch page.
//!
//! All figures are fixed presentation values. Nothing here is computed from
//! live data.

/// Sum of [`INVESTMENT_ITEMS`]
pub const TOTAL_INVESTMENT: u64 = 2_500_000;

/// Allocation bars are drawn against this value rather than the total so the
/// largest line item fills most of the track.
pub const INVESTMENT_BAR_SCALE: u64 = 1_500_000;

/// Seconds between successive bar reveals
pub const BAR_STAGGER_SECS: f64 = 0.1;

/// One row of the investment allocation chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvestmentItem {
    pub label: &'static str,
    pub value: u64,
    /// CSS color of the bar fill
    pub color: &'static str,
}

impl InvestmentItem {
    /// Bar width as a percentage of the track, capped at 100
    pub fn bar_width_percent(&self) -> f64 {
        (self.value as f64 / INVESTMENT_BAR_SCALE as f64 * 100.0).min(100.0)
    }

    /// Value as US currency, e.g. `$1,300,000`
    pub fn display_value(&self) -> String {
        format_usd(self.value)
    }
}

pub const INVESTMENT_ITEMS: [InvestmentItem; 7] = [
    InvestmentItem { label: "Construction & Buildout", value: 1_300_000, color: "#2A2825" },
    InvestmentItem { label: "Kitchen Equipment", value: 350_000, color: "#78716c" },
    InvestmentItem { label: "Arch. & Engineering", value: 300_000, color: "#a8a29e" },
    InvestmentItem { label: "Bar Buildout", value: 200_000, color: "#C5A059" },
    InvestmentItem { label: "Furniture & Decor", value: 200_000, color: "#D4B06A" },
    InvestmentItem { label: "Permits & Fees", value: 75_000, color: "#E5C380" },
    InvestmentItem { label: "Pre-Opening", value: 75_000, color: "#d6d3d1" },
];

/// Reveal delay for the bar at `index`
pub fn bar_delay_secs(index: usize) -> f64 {
    index as f64 * BAR_STAGGER_SECS
}

/// Tenant improvement allowance being negotiated
pub const TI_ALLOWANCE_NOTE: &str = "Targeting $450k - $550k TI Allowance";

/// First-year revenue projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueProjection {
    pub guests_per_day: u32,
    pub average_ticket: u32,
    pub gross_revenue_label: &'static str,
    pub net_profit_label: &'static str,
    pub margin_percent: u32,
}

pub const REVENUE: RevenueProjection = RevenueProjection {
    guests_per_day: 150,
    average_ticket: 70,
    gross_revenue_label: "$3.78M",
    net_profit_label: "~$756k",
    margin_percent: 20,
};

impl RevenueProjection {
    /// Gross revenue implied by guests and ticket over a 360 day year
    pub fn gross_annual(&self) -> u64 {
        u64::from(self.guests_per_day) * u64::from(self.average_ticket) * 360
    }

    /// Net profit at the modeled margin
    pub fn net_annual(&self) -> u64 {
        self.gross_annual() * u64::from(self.margin_percent) / 100
    }
}

/// Donut ring geometry. The stroke starts fully hidden (offset equals the
/// dash length) and reveals to `DONUT_REVEALED_OFFSET`, roughly 80% of the
/// circle.
pub const DONUT_DASH: f64 = 300.0;
pub const DONUT_REVEALED_OFFSET: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub name: &'static str,
    pub description: &'static str,
}

pub const MENU_ITEMS: [MenuItem; 4] = [
    MenuItem { name: "Wagyu & Prime Steaks", description: "Premium cuts, fire-grilled precision." },
    MenuItem { name: "Baja Style Seafood", description: "Coastal inspired, fresh daily catch." },
    MenuItem { name: "Modern Ceviche", description: "Acid-cured, vibrant flavors." },
    MenuItem { name: "Fire Grilled Meats", description: "Signature open-flame preparation." },
];

/// Bolded lead plus body text, used for bullet lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
}

pub const AUDIENCE: [Highlight; 2] = [
    Highlight {
        title: "Local Professionals & High Income Households:",
        body: "Young professionals, entrepreneurs, and affluent families.",
    },
    Highlight {
        title: "Experience Seekers:",
        body: "Diners looking for elevated cuisine, refined ambiance, and a social environment.",
    },
];

pub const LOCATION_HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        title: "First-Generation Buildout:",
        body: "Complete creative freedom for a purpose-built, world-class space.",
    },
    Highlight {
        title: "High Traffic:",
        body: "Crossroads of highest pedestrian activity and tourism draw.",
    },
    Highlight {
        title: "Market Dominance:",
        body: "No direct competition in the luxury modern Mexican space.",
    },
];

/// Street labels on the location diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapStreet {
    pub name: &'static str,
    pub note: &'static str,
}

pub const MAP_AVENUE: MapStreet = MapStreet { name: "Mission Inn Avenue", note: "(High Tourism Traffic)" };
pub const MAP_STREET: MapStreet = MapStreet { name: "Market Street", note: "Artery" };

/// Cells in the map background grid (columns, rows)
pub const MAP_GRID: (usize, usize) = (12, 6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub description: Option<&'static str>,
}

pub const TEAM: [TeamMember; 2] = [
    TeamMember {
        name: "Oscar De La Hoya",
        role: "Strategic Partner",
        description: Some(
            "Provides strategic credibility, cultural authenticity, and enhanced visibility. Assists with financing, media attention, and long-term scalability.",
        ),
    },
    TeamMember {
        name: "Operational Team",
        role: "Execution",
        description: Some(
            "Experienced Executive Chef, Mixologists, and Front-of-House management dedicated to disciplined execution and consistent quality.",
        ),
    },
];

/// Label/value rows of the invest card
pub const PITCH_TERMS: [(&str, &str); 3] = [
    ("Total Investment", "$2,500,000"),
    ("Projected Net Profit", "~$756,000/yr"),
    ("Location", "Downtown Riverside"),
];

pub const EXPANSION_MARKETS: &str = "Following a successful launch, expansion will focus on high-income suburban and coastal markets across Southern California (Orange County, Pasadena, San Diego) and major Southwest markets (Scottsdale, Las Vegas).";

pub const FOOTER_LINKS: [&str; 3] = ["Instagram", "TikTok", "Press"];

/// Format whole dollars with thousands separators
pub fn format_usd(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_sums_to_total() {
        let sum: u64 = INVESTMENT_ITEMS.iter().map(|i| i.value).sum();
        assert_eq!(sum, TOTAL_INVESTMENT);
    }

    #[test]
    fn bar_widths_use_visual_scale() {
        let construction = INVESTMENT_ITEMS[0];
        assert!((construction.bar_width_percent() - 86.666).abs() < 0.01);

        let permits = INVESTMENT_ITEMS[5];
        assert!((permits.bar_width_percent() - 5.0).abs() < 1e-9);

        for item in INVESTMENT_ITEMS {
            assert!(item.bar_width_percent() <= 100.0);
        }
    }

    #[test]
    fn bar_delays_stagger() {
        assert_eq!(bar_delay_secs(0), 0.0);
        assert!((bar_delay_secs(3) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn usd_formatting() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(999), "$999");
        assert_eq!(format_usd(75_000), "$75,000");
        assert_eq!(format_usd(1_300_000), "$1,300,000");
        assert_eq!(INVESTMENT_ITEMS[1].display_value(), "$350,000");
    }

    #[test]
    fn revenue_labels_match_model() {
        assert_eq!(REVENUE.gross_annual(), 3_780_000);
        assert_eq!(REVENUE.net_annual(), 756_000);
    }

    #[test]
    fn donut_reveal_is_partial() {
        let shown = (DONUT_DASH - DONUT_REVEALED_OFFSET) / DONUT_DASH;
        assert!((shown - 0.8).abs() < 1e-9);
    }

    #[test]
    fn pitch_terms_agree_with_figures() {
        assert_eq!(PITCH_TERMS[0].1, format_usd(TOTAL_INVESTMENT));
        assert!(PITCH_TERMS[1].1.contains("756,000"));
    }
}
