use showmore::prelude::*;
use showmore::widgets::trim::ELLIPSIS;

/// A monospace host view which hard-wraps at a fixed column count
#[derive(Debug)]
struct ColumnView {
    columns: usize,
    lines: Option<LineBreaks>,
    shown: RichText,
    max_lines: Option<usize>,
}

impl ColumnView {
    fn new(columns: usize) -> Self {
        ColumnView {
            columns,
            lines: None,
            shown: RichText::default(),
            max_lines: None,
        }
    }

    fn layout(&mut self) {
        let mut ends = Vec::new();
        let (mut col, mut pos) = (0, 0);
        for c in self.shown.as_str().chars() {
            pos += 1;
            if c == '\n' {
                ends.push(pos);
                col = 0;
                continue;
            }
            col += 1;
            if col == self.columns {
                ends.push(pos);
                col = 0;
            }
        }
        if col > 0 || ends.is_empty() {
            ends.push(pos);
        }
        self.lines = Some(LineBreaks::new(ends));
    }
}

impl TextView for ColumnView {
    fn line_count(&self) -> Result<usize, LayoutError> {
        self.lines.as_ref().map(|l| l.line_count()).ok_or(LayoutError::NotReady)
    }

    fn line_end(&self, line: usize) -> Result<usize, LayoutError> {
        self.lines.as_ref().ok_or(LayoutError::NotReady)?.line_end(line)
    }

    fn set_text(&mut self, text: RichText) {
        self.shown = text;
        self.lines = None;
    }

    fn set_max_lines(&mut self, lines: Option<usize>) {
        self.max_lines = lines;
    }
}

/// Run layout passes until the label stops requesting them
fn settle(label: &mut ExpandableLabel<ColumnView>, mut action: Action) -> usize {
    let mut passes = 0;
    while action.needs_layout() {
        passes += 1;
        assert!(passes < 10, "layout does not settle");
        label.view_mut().layout();
        action = label.on_layout().unwrap();
    }
    passes
}

fn alphabet(len: usize) -> String {
    (0..len).map(|i| char::from(b'a' + (i % 26) as u8)).collect()
}

fn label(columns: usize, config: LabelConfig, text: &str) -> ExpandableLabel<ColumnView> {
    let mut label = ExpandableLabel::new(ColumnView::new(columns), config);
    let action = label.set_text(text);
    settle(&mut label, action);
    label
}

fn max_lines(n: usize) -> LabelConfig {
    LabelConfig {
        max_lines: Some(n),
        ..Default::default()
    }
}

fn max_length(n: usize) -> LabelConfig {
    LabelConfig {
        max_length: Some(n),
        ..Default::default()
    }
}

#[test]
fn lines_example() {
    // five lines ending at [20, 45, 70, 95, 120]
    let source = alphabet(120);
    let config = LabelConfig {
        max_lines: Some(2),
        collapsed_text: "Show".into(),
        ..Default::default()
    };
    let mut label = ExpandableLabel::new(ColumnView::new(200), config).with_text(source.as_str());
    label.view_mut().lines = Some(LineBreaks::new([20, 45, 70, 95, 120]));
    let _ = label.on_layout().unwrap();

    assert_eq!(label.truncation_index(), Some(45));
    let expected = format!("{}...Show", &source[..37]);
    assert_eq!(label.view().shown.as_str(), expected);
    assert_eq!(label.view().shown.link_str(), Some("Show"));
}

#[test]
fn length_example() {
    let config = LabelConfig {
        max_length: Some(10),
        collapsed_text: "More".into(),
        ..Default::default()
    };
    let label = label(80, config, "Hello world, this is long");
    assert_eq!(label.view().shown.as_str(), "Hello worl...More");
}

#[test]
fn no_budget_shows_source() {
    for len in [0, 1, 30, 500] {
        let source = alphabet(len);
        let label = label(20, LabelConfig::default(), &source);
        assert_eq!(label.mode(), TrimMode::None);
        assert_eq!(label.view().shown, RichText::plain(source.as_str()));
        assert_eq!(label.trimmed_text(), RichText::plain(source.as_str()));
        assert!(!label.is_layout_pending());
    }
}

#[test]
fn fitting_lines_unchanged() {
    let source = alphabet(60);
    for n in [3, 4, 10] {
        let label = label(20, max_lines(n), &source);
        assert_eq!(label.truncation_index(), None);
        assert_eq!(label.view().shown.as_str(), source);
        assert!(!label.view().shown.has_link());
    }
}

#[test]
fn collapsed_lines_fit_budget() {
    let source = alphabet(100);
    let trailer = LabelConfig::default().collapsed_text;
    for n in 1..5 {
        let label = label(20, max_lines(n), &source);
        let index = label.truncation_index().unwrap();
        assert_eq!(index, 20 * n);

        let adjusted = index - (ELLIPSIS.len() + trailer.len() + 1);
        let shown = &label.view().shown;
        assert_eq!(shown.char_len(), adjusted + ELLIPSIS.len() + trailer.len());
        assert!(shown.as_str().ends_with(&trailer));
        assert!(shown.as_str().starts_with(&source[..adjusted]));

        // the host laid out the collapsed text after the label detached
        assert!(label.view().line_count().unwrap() <= n);
    }
}

#[test]
fn collapsed_length_prefix() {
    let source = "The quick brown fox jumps over the lazy dog";
    for n in [0, 1, 9, 20, 42] {
        let label = label(80, max_length(n), source);
        let shown = label.view().shown.as_str().to_string();
        let suffix = format!("{ELLIPSIS}{}", label.config().collapsed_text);
        let prefix = shown.strip_suffix(&suffix).unwrap();
        assert_eq!(prefix.chars().count(), n);
        assert_eq!(prefix, &source[..n]);
    }
}

#[test]
fn double_toggle_restores_text() {
    for config in [max_lines(2), max_length(15)] {
        let mut label = label(20, config, &alphabet(90));
        let collapsed = label.view().shown.clone();

        let mut cx = EventCx::new();
        let index = collapsed.char_len() - 1;
        assert!(label.handle_event(&mut cx, Event::Click { index }).is_used());
        assert!(!label.is_collapsed());
        assert_ne!(label.view().shown, collapsed);

        let _ = label.toggle();
        assert!(label.is_collapsed());
        assert_eq!(label.view().shown, collapsed);
        assert_eq!(label.trimmed_text(), collapsed);
    }
}

#[test]
fn expanded_length_has_trailer() {
    let mut label = label(80, max_length(5), "Hello world");
    let mut cx = EventCx::new();
    assert_eq!(label.handle_event(&mut cx, Event::Command(Command::Activate)), Used);

    let shown = label.view().shown.clone();
    assert_eq!(shown.as_str(), "Hello world...Show less");
    assert_eq!(
        shown.color_tokens(),
        &[(14, Some(label.config().expanded_trailer_color))]
    );

    // click on "Show less"
    assert_eq!(label.handle_event(&mut cx, Event::Click { index: 16 }), Used);
    assert_eq!(label.view().shown.as_str(), "Hello...Show more");
}

#[test]
fn expanded_lines_trailer_is_optional() {
    let source = alphabet(100);
    let mut label = label(20, max_lines(2), &source);
    let _ = label.set_collapsed(false);
    assert_eq!(label.view().shown.as_str(), source);

    let action = label.set_show_expanded_trailer(true);
    assert!(action.needs_layout());
    settle(&mut label, action);
    let expected = format!("{source}...Show less");
    assert_eq!(label.view().shown.as_str(), expected);

    let mut cx = EventCx::new();
    let index = label.view().shown.char_len() - 2;
    assert!(label.handle_event(&mut cx, Event::Click { index }).is_used());
    assert!(label.is_collapsed());
}

#[test]
fn resize_recomputes() {
    let source = alphabet(100);
    let mut label = label(20, max_lines(2), &source);
    assert_eq!(label.truncation_index(), Some(40));

    label.view_mut().columns = 30;
    let action = label.resize();
    assert!(label.is_layout_pending());
    // the full text is shown for measurement
    assert_eq!(label.view().shown.as_str(), source);
    assert_eq!(settle(&mut label, action), 2);
    assert_eq!(label.truncation_index(), Some(60));
    assert_eq!(label.layout_passes(), 2);
}

#[test]
fn setters_rerender() {
    let source = alphabet(100);
    let mut label = label(20, max_lines(2), &source);

    let action = label.set_collapsed_text("More");
    settle(&mut label, action);
    assert_eq!(label.view().shown.as_str(), format!("{}...More", &source[..32]));

    let action = label.set_max_lines_visible(Some(1));
    settle(&mut label, action);
    assert_eq!(label.truncation_index(), Some(20));
    assert_eq!(label.view().shown.as_str(), format!("{}...More", &source[..12]));

    let action = label.set_max_lines_visible(None);
    settle(&mut label, action);
    assert_eq!(label.mode(), TrimMode::None);
    assert_eq!(label.view().shown.as_str(), source);

    let action = label.set_max_length_visible(Some(4));
    assert_eq!(settle(&mut label, action), 1);
    assert_eq!(label.view().shown.as_str(), "abcd...More");

    let red = Rgba8Srgb::rgb(255, 0, 0);
    let _ = label.set_trailer_color(red);
    assert_eq!(label.view().shown.color_tokens(), &[(7, Some(red))]);
}

#[test]
fn expanded_setters_rerender() {
    let mut label = label(80, max_length(5), "Hello world");
    let _ = label.toggle();
    assert_eq!(label.view().shown.as_str(), "Hello world...Show less");

    let action = label.set_expanded_text("Less");
    assert!(action.needs_layout());
    assert_eq!(label.view().shown.as_str(), "Hello world...Less");
    assert_eq!(label.view().shown.link_str(), Some("Less"));

    let red = Rgba8Srgb::rgb(255, 0, 0);
    let action = label.set_expanded_trailer_color(red);
    assert_eq!(action, Action::REDRAW);
    assert_eq!(label.view().shown.as_str(), "Hello world...Less");
    assert_eq!(label.view().shown.color_tokens(), &[(14, Some(red))]);
}

#[test]
fn color_change_needs_no_layout() {
    let mut label = label(80, max_length(5), "Hello world");
    let green = Rgba8Srgb::rgb(0, 255, 0);

    let action = label.set_trailer_color(green);
    assert!(!action.needs_layout());
    assert!(action.contains(Action::REDRAW));
    assert_eq!(label.view().shown.color_tokens(), &[(8, Some(green))]);

    assert!(label.set_trailer_color(green).is_empty());

    // the expanded colour is not displayed while collapsed
    assert!(label.set_expanded_trailer_color(green).is_empty());
}

#[test]
fn set_config_switches_mode_while_expanded() {
    let source = alphabet(100);
    let mut label = label(20, max_length(5), &source);
    let _ = label.toggle();
    assert_eq!(label.view().shown.as_str(), format!("{source}...Show less"));

    let action = label.set_config(max_lines(2));
    assert!(action.needs_layout());
    assert_eq!(label.mode(), TrimMode::Lines(2));
    assert!(label.is_layout_pending());
    assert!(!label.is_collapsed());
    assert_eq!(label.truncation_index(), None);
    assert_eq!(label.view().shown, RichText::plain(source.as_str()));

    assert_eq!(settle(&mut label, action), 1);
    assert!(!label.is_layout_pending());
    assert_eq!(label.truncation_index(), Some(40));
    assert_eq!(label.view().shown, RichText::plain(source.as_str()));
}

#[test]
fn text_change_keeps_state() {
    let mut label = label(20, max_lines(1), &alphabet(50));
    let _ = label.toggle();
    let action = label.set_text("short");
    settle(&mut label, action);
    assert!(!label.is_collapsed());
    assert_eq!(label.view().shown.as_str(), "short");
}

#[test]
fn layout_before_ready_is_an_error() {
    let mut label = ExpandableLabel::new(ColumnView::new(20), max_lines(2)).with_text("text");
    assert_eq!(label.on_layout(), Err(LayoutError::NotReady));
    assert!(label.is_layout_pending());
}

#[test]
fn attributes_from_toml() {
    use showmore::config::Format;

    let attrs: LabelAttributes = Format::Toml
        .read_str(
            r##"
            text = "Hello world, this is long"
            collapsed_text = "More"
            max_length = 10
            max_lines = -1
            trailer_color = "#FF0000"
            "##,
        )
        .unwrap();
    let label = ExpandableLabel::from_attributes(ColumnView::new(80), &attrs);
    assert_eq!(label.mode(), TrimMode::Length(10));
    assert_eq!(label.view().shown.as_str(), "Hello worl...More");
    assert_eq!(
        label.view().shown.color_tokens(),
        &[(13, Some(Rgba8Srgb::rgb(255, 0, 0)))]
    );
}

#[test]
fn absent_text_is_empty() {
    let attrs = LabelAttributes::from_pairs([("max_length", "3")]);
    let label = ExpandableLabel::from_attributes(ColumnView::new(80), &attrs);
    assert_eq!(label.text(), "");
    assert_eq!(label.view().shown, RichText::plain(""));
}
