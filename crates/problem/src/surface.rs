/// Drawing surface a [`Problem`](crate::Problem) renders its result into.
///
/// This is a plain description of a bar chart; the application turns it
/// into widgets. It is owned by whoever drives the problem and must be
/// cleared before each redraw.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Surface {
    bars: Vec<Bar>,
    y_label: Option<String>,
    y_bottom: Option<f64>,
    revision: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove everything drawn so far.
    pub fn clear(&mut self) {
        self.bars.clear();
        self.y_label = None;
        self.y_bottom = None;
        self.bump();
    }

    /// Append one bar per `(label, value)` pair.
    pub fn bar_chart<I, S>(&mut self, bars: I)
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        self.bars.extend(bars.into_iter().map(|(label, value)| Bar {
            label: label.into(),
            value,
        }));
        self.bump();
    }

    pub fn set_y_label(&mut self, label: impl Into<String>) {
        self.y_label = Some(label.into());
        self.bump();
    }

    /// Pin the bottom of the vertical axis.
    pub fn set_y_bottom(&mut self, bottom: f64) {
        self.y_bottom = Some(bottom);
        self.bump();
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn y_label(&self) -> Option<&str> {
        self.y_label.as_deref()
    }

    pub fn y_bottom(&self) -> Option<f64> {
        self.y_bottom
    }

    /// True when nothing has been drawn since the last clear.
    pub fn is_blank(&self) -> bool {
        self.bars.is_empty()
    }

    /// Incremented on every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Vertical range covered by the drawing: the pinned bottom if set,
    /// otherwise the data range including zero.
    pub fn y_range(&self) -> (f64, f64) {
        let finite = self
            .bars
            .iter()
            .map(|b| b.value)
            .filter(|v| v.is_finite());
        let (lo, hi) = finite.fold((0.0_f64, 0.0_f64), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        let bottom = self.y_bottom.unwrap_or(lo);
        let mut top = hi;
        if top <= bottom {
            top = bottom + 1.0;
        }
        (bottom, top)
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
