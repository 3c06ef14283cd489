use std::f64::consts::{FRAC_PI_2, TAU};

/// Gap between the chart edge and the SVG viewport.
const PADDING: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliceFill {
    /// Counted by the numerator.
    On,
    /// Remaining part of the whole.
    Off,
    /// Outline only; the chart is not revealed yet.
    Empty,
}

impl SliceFill {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::On => "slice slice--on",
            Self::Off => "slice slice--off",
            Self::Empty => "slice slice--empty",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SliceVm {
    pub path: String,
    pub fill: SliceFill,
}

/// Geometry for one fraction pie chart.
///
/// A pure function of `(numerator, denominator, filled)` and the pixel size.
#[derive(Clone, Debug, PartialEq)]
pub struct PieVm {
    pub size: u32,
    pub center: f64,
    pub radius: f64,
    /// Set for a single-slice chart, which is drawn as one circle.
    pub whole: Option<SliceFill>,
    pub slices: Vec<SliceVm>,
    pub label: String,
}

impl PieVm {
    #[must_use]
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.size, self.size)
    }

    #[must_use]
    pub fn highlighted(&self) -> usize {
        let whole = usize::from(self.whole == Some(SliceFill::On));
        whole + self.slices.iter().filter(|s| s.fill == SliceFill::On).count()
    }
}

fn fill_for(index: u32, numerator: u32, filled: bool) -> SliceFill {
    match (filled, index < numerator) {
        (false, _) => SliceFill::Empty,
        (true, true) => SliceFill::On,
        (true, false) => SliceFill::Off,
    }
}

#[must_use]
pub fn map_pie(numerator: u32, denominator: u32, filled: bool, size: u32) -> PieVm {
    let center = f64::from(size) / 2.0;
    let radius = (center - PADDING).max(1.0);
    let label = format!("{numerator}/{denominator}");

    if denominator <= 1 {
        let whole = if denominator == 1 {
            Some(fill_for(0, numerator, filled))
        } else {
            None
        };
        return PieVm {
            size,
            center,
            radius,
            whole,
            slices: Vec::new(),
            label,
        };
    }

    let slice_angle = TAU / f64::from(denominator);
    let point = |angle: f64| {
        (
            center + radius * angle.cos(),
            center + radius * angle.sin(),
        )
    };

    let slices = (0..denominator)
        .map(|i| {
            let start = f64::from(i) * slice_angle - FRAC_PI_2;
            let (x0, y0) = point(start);
            let (x1, y1) = point(start + slice_angle);
            let large_arc = u8::from(slice_angle > std::f64::consts::PI);
            SliceVm {
                path: format!(
                    "M {center:.2} {center:.2} L {x0:.2} {y0:.2} A {radius:.2} {radius:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z"
                ),
                fill: fill_for(i, numerator, filled),
            }
        })
        .collect();

    PieVm {
        size,
        center,
        radius,
        whole: None,
        slices,
        label,
    }
}
