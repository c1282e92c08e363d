// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Expandable label demo
//!
//! A headless host: text is hard-wrapped at a fixed column count and printed
//! to the terminal; clicks are simulated on the trailer.
//!
//! Usage: `showmore [COLUMNS]`

use showmore::prelude::*;

const TEXT: &str = "Expandable labels show a short preview of long text. \
Once the host has laid out the text, the label cuts it after a number of \
lines and appends an ellipsis and a trailer. Clicking the trailer shows the \
whole text; in line mode the expanded text may be collapsed again only if \
the expanded trailer is enabled.";

struct Terminal {
    columns: usize,
    lines: Option<LineBreaks>,
    shown: RichText,
}

impl Terminal {
    fn layout(&mut self) {
        let len = self.shown.char_len();
        let mut ends: Vec<usize> = (1..=len / self.columns).map(|i| i * self.columns).collect();
        if len % self.columns != 0 || ends.is_empty() {
            ends.push(len);
        }
        self.lines = Some(LineBreaks::new(ends));
    }

    fn print(&self) {
        let chars: Vec<char> = self.shown.as_str().chars().collect();
        let mut start = 0;
        for end in self.lines.iter().flat_map(|lines| lines.iter()) {
            let line: String = chars[start..end].iter().collect();
            println!("| {line}");
            start = end;
        }
        println!();
    }
}

impl TextView for Terminal {
    fn line_count(&self) -> Result<usize, LayoutError> {
        self.lines.as_ref().map(|l| l.line_count()).ok_or(LayoutError::NotReady)
    }

    fn line_end(&self, line: usize) -> Result<usize, LayoutError> {
        self.lines.as_ref().ok_or(LayoutError::NotReady)?.line_end(line)
    }

    fn set_text(&mut self, text: RichText) {
        log::debug!("Terminal::set_text: link={:?}", text.link());
        self.shown = text;
        self.lines = None;
    }

    fn set_max_lines(&mut self, _: Option<usize>) {}
}

fn settle(label: &mut ExpandableLabel<Terminal>, mut action: Action) -> Result<(), LayoutError> {
    while action.needs_layout() {
        label.view_mut().layout();
        action = label.on_layout()?;
    }
    label.view().print();
    Ok(())
}

fn click_trailer(label: &mut ExpandableLabel<Terminal>) -> Result<(), LayoutError> {
    let shown = &label.view().shown;
    let Some(range) = shown.link() else {
        println!("(no trailer to click)\n");
        return Ok(());
    };
    let index = shown.as_str()[..range.start].chars().count();
    println!("> click on {:?}", shown.link_str().unwrap_or_default());

    let mut cx = EventCx::new();
    if label.handle_event(&mut cx, Event::Click { index }).is_used() {
        settle(label, cx.take_action())?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let columns: usize = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<usize>()?.max(1),
        None => 40,
    };
    let view = Terminal {
        columns,
        lines: None,
        shown: RichText::default(),
    };

    let mut label = ExpandableLabel::new(view, LabelConfig::default());
    let _ = label.set_collapsed_text("Show");
    let _ = label.set_expanded_text("Less");
    let _ = label.set_show_expanded_trailer(true);
    let action = label.set_max_lines_visible(Some(2)) | label.set_text(TEXT);
    settle(&mut label, action)?;

    click_trailer(&mut label)?;
    click_trailer(&mut label)?;

    println!("> resize to {} columns", columns * 2);
    label.view_mut().columns = columns * 2;
    let action = label.resize();
    settle(&mut label, action)?;

    Ok(())
}
