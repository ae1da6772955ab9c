//! Artist detail screen
//!
//! A pinned top bar over a column holding the header image, the tab row and
//! a three page pager of placeholder lists. Vertical scrolling inside the
//! lists flows through the nested scroll chain so the header image can react
//! to it.

use crate::app::screens::scaffold::{Scaffold, ScaffoldLayout};
use crate::app::state::{ScreenAction, NUDGE};
use crate::app::theme;
use crate::app::transition::VisibilityTransition;
use crate::assets::{self, Bitmap, THUMBNAIL_ID};
use crate::config::ScreenConfig;
use crate::models::{placeholder_items, Offset, ScrollSignal, ScrollSource, ITEMS_PER_TAB, TABS};
use crate::pager::{PageAnimator, PagerState};
use crate::scroll::{
    dispatch_scroll, HeaderVisibility, LazyListState, NestedScrollConnection,
    PinnedScrollBehavior, ScrollCoordinator,
};
use crate::util::{Density, Dp};
use crate::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use std::rc::Rc;
use std::time::Duration;

/// Gap between list rows
const ITEM_SPACING: Dp = Dp(8.0);
/// Horizontal padding of list rows
const ITEM_PADDING: Dp = Dp(16.0);
/// Spacer below the tab row
const TAB_DIVIDER: Dp = Dp(5.0);
/// Tab titles plus the selection indicator
const TAB_ROW_ROWS: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GestureAxis {
    Undecided,
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GestureTarget {
    Header,
    Content,
}

/// An in-progress left-button drag
#[derive(Debug, Clone, Copy)]
struct Gesture {
    target: GestureTarget,
    axis: GestureAxis,
    last_column: u16,
    last_row: u16,
    start_page: usize,
}

/// Areas of the last rendered frame, used for mouse hit testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub scaffold: ScaffoldLayout,
    pub header: Rect,
    pub tabs: Rect,
    pub pager: Rect,
}

fn hit(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

pub struct DetailScreen {
    title: String,
    density: Density,
    scaffold: Scaffold,
    coordinator: ScrollCoordinator,
    top_bar: PinnedScrollBehavior,
    pager: PagerState,
    animator: PageAnimator,
    lists: Vec<LazyListState>,
    items: Vec<String>,
    thumbnail: Bitmap,
    header: VisibilityTransition,
    header_max_rows: u16,
    item_padding_columns: u16,
    divider_rows: u16,
    layout: ScreenLayout,
    gesture: Option<Gesture>,
    shown_page: usize,
}

impl DetailScreen {
    /// Compose the screen. `density` is applied here once for the lifetime of
    /// the screen.
    pub fn new(config: &ScreenConfig, density: Density) -> Result<Self> {
        let thumbnail = assets::load(THUMBNAIL_ID)?;
        let coordinator = ScrollCoordinator::new(&density);
        let spacing_rows = density.dp_to_rows(ITEM_SPACING);

        let lists = TABS
            .iter()
            .map(|_| LazyListState::new(ITEMS_PER_TAB, spacing_rows, density.cell_height_px()))
            .collect();

        tracing::info!(
            scale = density.scale(),
            play_distance_px = coordinator.play_distance(),
            "detail screen composed"
        );

        Ok(Self {
            title: config.title.clone(),
            density,
            scaffold: Scaffold::new(),
            coordinator,
            top_bar: PinnedScrollBehavior::new(),
            pager: PagerState::new(TABS.len()),
            animator: PageAnimator::new(
                config.animation.page_scroll,
                config.animation.frame_interval,
            ),
            lists,
            items: placeholder_items(),
            thumbnail,
            header: VisibilityTransition::new(true, config.animation.header_transition),
            header_max_rows: config.header.max_rows,
            item_padding_columns: density.dp_to_columns(ITEM_PADDING),
            divider_rows: density.dp_to_rows(TAB_DIVIDER),
            layout: ScreenLayout::default(),
            gesture: None,
            shown_page: 0,
        })
    }

    pub fn header_visibility(&self) -> HeaderVisibility {
        self.coordinator.visibility()
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    pub fn pager(&self) -> &PagerState {
        &self.pager
    }

    pub fn list(&self, page: usize) -> Option<&LazyListState> {
        self.lists.get(page)
    }

    pub fn top_bar(&self) -> &PinnedScrollBehavior {
        &self.top_bar
    }

    pub fn header_transition(&self) -> &VisibilityTransition {
        &self.header
    }

    pub fn layout(&self) -> ScreenLayout {
        self.layout
    }

    /// Whether another frame is needed soon
    pub fn is_animating(&self) -> bool {
        self.animator.is_running() || self.header.is_animating()
    }

    /// Apply a keyboard-originated action
    pub fn handle_action(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::ScrollRows { rows, source } => {
                self.scroll_content(self.density.rows_to_px(rows), source);
            }
            ScreenAction::Nudge(direction) => {
                let delta = self.density.to_px(NUDGE) * direction.signum() as f32;
                self.scroll_content(delta, ScrollSource::Keyboard);
            }
            ScreenAction::ScrollPages(pages) => {
                let rows = self.current_list().viewport_rows().max(1) as f32 * pages as f32;
                self.scroll_content(self.density.rows_to_px(rows), ScrollSource::Keyboard);
            }
            ScreenAction::ScrollToStart => {
                let delta = self.current_list().delta_to_start();
                self.scroll_content(delta, ScrollSource::Program);
            }
            ScreenAction::ScrollToEnd => {
                let delta = self.current_list().delta_to_end();
                self.scroll_content(delta, ScrollSource::Program);
            }
            ScreenAction::Swipe(direction) => {
                // repeated swipes chain from the page already being animated to
                let from = self
                    .animator
                    .target()
                    .unwrap_or_else(|| self.pager.current_page());
                let target = self.pager.neighbour(from, direction);
                self.animate_to_page(target);
            }
            ScreenAction::SelectTab(index) => self.select_tab(index),
            ScreenAction::Quit | ScreenAction::None => {}
        }
    }

    /// Select a tab; the pager animates to its page
    pub fn select_tab(&mut self, index: usize) {
        if index < TABS.len() {
            self.animate_to_page(index);
        }
    }

    fn animate_to_page(&mut self, page: usize) {
        self.animator
            .animate_scroll_to_page(self.pager.position(), page);
    }

    fn current_list(&self) -> &LazyListState {
        &self.lists[self.pager.current_page()]
    }

    /// Route a vertical delta from the visible list through the nested scroll chain
    pub fn scroll_content(&mut self, delta_y: f32, source: ScrollSource) -> Offset {
        let page = self.pager.current_page();
        let list = &mut self.lists[page];
        let mut chain: [&mut dyn NestedScrollConnection; 2] =
            [&mut self.top_bar, &mut self.coordinator];

        let consumed = dispatch_scroll(
            &mut chain,
            ScrollSignal::new(Offset::vertical(delta_y), source),
            |available| Offset::vertical(list.scroll_by(available.y)),
        );
        self.sync_header();
        consumed
    }

    /// Route a vertical delta that started over the header image. The image
    /// claims whatever reaches it, and the top bar sees that as content moving.
    pub fn scroll_header(&mut self, delta_y: f32, source: ScrollSource) -> Offset {
        let mut chain: [&mut dyn NestedScrollConnection; 2] =
            [&mut self.top_bar, &mut self.coordinator];
        let consumed = dispatch_scroll(
            &mut chain,
            ScrollSignal::new(Offset::vertical(delta_y), source),
            |available| available,
        );
        self.sync_header();
        consumed
    }

    fn sync_header(&mut self) {
        self.header
            .set_visible(self.coordinator.visibility().is_shown());
    }

    /// Advance animations by `elapsed`. Returns true when a redraw is needed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let mut changed = self.animator.apply_pending(&mut self.pager);
        self.sync_header();
        changed |= self.header.tick(elapsed);

        let page = self.pager.current_page();
        if page != self.shown_page {
            self.shown_page = page;
            // the bar now sits over a different list
            self.top_bar.reset_to(-self.lists[page].offset_px());
            tracing::debug!(page, title = TABS[page].title, "tab selected");
        }

        changed
    }

    /// Apply a mouse event against the last rendered layout
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);
        let one_row = self.density.rows_to_px(1.0);

        match mouse.kind {
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let delta = if mouse.kind == MouseEventKind::ScrollUp {
                    one_row
                } else {
                    -one_row
                };
                if hit(self.layout.header, column, row) {
                    self.scroll_header(delta, ScrollSource::Wheel);
                } else if hit(self.layout.pager, column, row) {
                    self.scroll_content(delta, ScrollSource::Wheel);
                }
            }
            MouseEventKind::ScrollLeft if hit(self.layout.pager, column, row) => {
                self.handle_action(ScreenAction::Swipe(-1));
            }
            MouseEventKind::ScrollRight if hit(self.layout.pager, column, row) => {
                self.handle_action(ScreenAction::Swipe(1));
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.tab_at(column, row) {
                    self.select_tab(index);
                    return;
                }

                let target = if hit(self.layout.header, column, row) {
                    Some(GestureTarget::Header)
                } else if hit(self.layout.pager, column, row) {
                    Some(GestureTarget::Content)
                } else {
                    None
                };

                self.gesture = target.map(|target| Gesture {
                    target,
                    axis: GestureAxis::Undecided,
                    last_column: column,
                    last_row: row,
                    start_page: self.pager.current_page(),
                });
            }
            MouseEventKind::Drag(MouseButton::Left) => self.drag_to(column, row),
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(gesture) = self.gesture.take() {
                    if gesture.axis == GestureAxis::Horizontal {
                        let target = self.pager.settle_target(gesture.start_page);
                        self.animate_to_page(target);
                    }
                }
            }
            _ => {}
        }
    }

    fn drag_to(&mut self, column: u16, row: u16) {
        let Some(mut gesture) = self.gesture else {
            return;
        };

        let dx = column as i32 - gesture.last_column as i32;
        let dy = row as i32 - gesture.last_row as i32;
        if dx == 0 && dy == 0 {
            return;
        }

        if gesture.axis == GestureAxis::Undecided {
            gesture.axis = if dx.abs() > dy.abs() && gesture.target == GestureTarget::Content {
                // the user takes the pager over from any running animation
                self.animator.cancel();
                gesture.start_page = self.pager.current_page();
                GestureAxis::Horizontal
            } else {
                GestureAxis::Vertical
            };
        }

        match gesture.axis {
            GestureAxis::Vertical if dy != 0 => {
                // pointer moving down pulls content toward its start
                let delta = self.density.rows_to_px(dy as f32);
                match gesture.target {
                    GestureTarget::Header => self.scroll_header(delta, ScrollSource::Drag),
                    GestureTarget::Content => self.scroll_content(delta, ScrollSource::Drag),
                };
            }
            GestureAxis::Horizontal if dx != 0 => {
                let width = self.layout.pager.width.max(1) as f32;
                self.pager.scroll_by_fraction(-(dx as f32) / width);
            }
            _ => {}
        }

        gesture.last_column = column;
        gesture.last_row = row;
        self.gesture = Some(gesture);
    }

    fn tab_rects(area: Rect) -> Rc<[Rect]> {
        let constraints: Vec<Constraint> = TABS
            .iter()
            .map(|_| Constraint::Ratio(1, TABS.len() as u32))
            .collect();
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area)
    }

    fn tab_at(&self, column: u16, row: u16) -> Option<usize> {
        let tabs = self.layout.tabs;
        let titles = Rect::new(tabs.x, tabs.y, tabs.width, TAB_ROW_ROWS.min(tabs.height));
        if !hit(titles, column, row) {
            return None;
        }
        Self::tab_rects(titles)
            .iter()
            .position(|rect| column >= rect.x && column < rect.right())
    }

    /// Render the whole screen
    pub fn render(&mut self, f: &mut Frame) {
        let area = f.size();
        let scaffold = self.scaffold.layout(area);

        f.render_widget(
            Block::default().style(Style::default().bg(theme::background())),
            area,
        );

        let content = scaffold.content;
        let full_header_rows = self
            .thumbnail
            .fill_width_rows(content.width)
            .min(self.header_max_rows);
        let header_rows = self.header.visible_rows(full_header_rows).min(content.height);
        let tab_rows = (TAB_ROW_ROWS + self.divider_rows).min(content.height - header_rows);
        let pager_rows = content.height - header_rows - tab_rows;

        let header = Rect::new(content.x, content.y, content.width, header_rows);
        let tabs = Rect::new(content.x, header.bottom(), content.width, tab_rows);
        let pager = Rect::new(content.x, tabs.bottom(), content.width, pager_rows);

        self.layout = ScreenLayout {
            scaffold,
            header,
            tabs,
            pager,
        };

        self.render_top_bar(f, scaffold.top_bar);
        self.render_header(f, header, full_header_rows);
        self.render_tabs(f, tabs);
        self.render_pager(f, pager);
        self.render_help(f, scaffold.bottom_bar);
    }

    /// Centered title with a leading back arrow
    fn render_top_bar(&self, f: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }

        let bg = if self.top_bar.is_overlapped() {
            theme::TOP_BAR_SCROLLED
        } else {
            theme::TOP_BAR
        };
        f.render_widget(Block::default().style(Style::default().bg(bg)), area);

        let middle = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        let title = Paragraph::new(self.title.as_str())
            .style(
                Style::default()
                    .fg(theme::ON_BACKGROUND)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, middle);

        if middle.width > 4 {
            f.buffer_mut().set_string(
                middle.x + 2,
                middle.y,
                "←",
                Style::default().fg(theme::ON_BACKGROUND).bg(bg),
            );
        }
    }

    /// The bottom of the image is revealed first while expanding
    fn render_header(&self, f: &mut Frame, area: Rect, full_rows: u16) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let lines = self.thumbnail.render_fill_width(area.width, full_rows);
        let skip = lines.len().saturating_sub(area.height as usize);
        let style = Style::default()
            .fg(theme::fade(theme::HEADER_ART, self.header.alpha()))
            .bg(theme::background());

        let text: Vec<Line> = lines
            .into_iter()
            .skip(skip)
            .map(|line| Line::from(Span::styled(line, style)))
            .collect();
        f.render_widget(Paragraph::new(text), area);
    }

    fn render_tabs(&self, f: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }

        let titles = Rect::new(area.x, area.y, area.width, 1);
        let selected = self.pager.current_page();
        for (index, rect) in Self::tab_rects(titles).iter().enumerate() {
            let style = if index == selected {
                Style::default()
                    .fg(theme::PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::MUTED)
            };
            let title = Paragraph::new(TABS[index].title)
                .style(style)
                .alignment(Alignment::Center);
            f.render_widget(title, *rect);
        }

        if area.height < 2 {
            return;
        }

        // indicator follows the fractional pager position
        let tab_width = area.width / TABS.len() as u16;
        let indicator_x =
            (self.pager.position() * area.width as f32 / TABS.len() as f32).round() as u16;
        let indicator = "━".repeat(tab_width as usize);
        f.buffer_mut().set_stringn(
            area.x + indicator_x.min(area.width.saturating_sub(tab_width)),
            area.y + 1,
            indicator,
            tab_width as usize,
            Style::default().fg(theme::PRIMARY),
        );
    }

    /// Render every page that intersects the viewport at its horizontal offset
    fn render_pager(&mut self, f: &mut Frame, area: Rect) {
        for list in &mut self.lists {
            list.set_viewport_rows(area.height);
        }
        if area.height == 0 || area.width == 0 {
            return;
        }

        let width = area.width as i32;
        let style = Style::default().fg(theme::ON_BACKGROUND);
        let buffer = f.buffer_mut();

        for (page, list) in self.lists.iter().enumerate() {
            let shift = ((page as f32 - self.pager.position()) * width as f32).round() as i32;
            if shift.abs() >= width {
                continue;
            }

            for (line, index) in list.visible_items() {
                let y = area.y + line;
                let start = area.x as i32 + shift + self.item_padding_columns as i32;
                for (i, c) in self.items[index].chars().enumerate() {
                    let x = start + i as i32;
                    if x >= area.x as i32 && x < area.right() as i32 {
                        buffer.get_mut(x as u16, y).set_char(c).set_style(style);
                    }
                }
            }
        }
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }

        let key = Style::default()
            .fg(theme::HELP_KEY)
            .add_modifier(Modifier::BOLD);
        let header_state = match self.coordinator.visibility() {
            HeaderVisibility::Shown => "shown",
            HeaderVisibility::Hidden => "hidden",
        };

        let help = Line::from(vec![
            Span::styled("↑↓", key),
            Span::raw(" Scroll  "),
            Span::styled("←→", key),
            Span::raw(" Swipe  "),
            Span::styled("1-3", key),
            Span::raw(" Tab  "),
            Span::styled("Q", key),
            Span::raw(" Quit  "),
            Span::styled(
                format!("header: {}", header_state),
                Style::default().fg(theme::MUTED),
            ),
        ]);

        f.render_widget(Paragraph::new(help).alignment(Alignment::Center), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen() -> DetailScreen {
        DetailScreen::new(&ScreenConfig::default(), Density::from_scale(1.0, 16.0))
            .expect("screen")
    }

    fn draw(screen: &mut DetailScreen) -> ratatui::buffer::Buffer {
        let mut terminal = Terminal::new(TestBackend::new(60, 40)).unwrap();
        terminal.draw(|f| screen.render(f)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &ratatui::buffer::Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer.get(x, y).symbol().to_string())
            .collect()
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_fresh_screen_shows_header() {
        let mut screen = screen();
        assert_eq!(screen.header_visibility(), HeaderVisibility::Shown);
        assert_eq!(screen.current_page(), 0);

        draw(&mut screen);
        assert!(screen.layout().header.height > 0);
    }

    #[test]
    fn test_content_respects_scaffold_insets() {
        let mut screen = screen();
        draw(&mut screen);
        let layout = screen.layout();
        assert_eq!(layout.header.y, Scaffold::TOP_BAR_ROWS);
        assert_eq!(layout.pager.bottom(), 40 - Scaffold::BOTTOM_INSET_ROWS);
    }

    #[test]
    fn test_scroll_down_hides_header_and_scrolls_list() {
        let mut screen = screen();
        draw(&mut screen);

        let consumed = screen.scroll_content(-20.0, ScrollSource::Drag);
        assert_eq!(consumed, Offset::vertical(-20.0));
        assert_eq!(screen.header_visibility(), HeaderVisibility::Hidden);
        assert_eq!(screen.list(0).map(|l| l.offset_px()), Some(20.0));
        assert!(screen.top_bar().is_overlapped());
    }

    #[test]
    fn test_sub_threshold_nudge_keeps_state() {
        let mut screen = screen();
        draw(&mut screen);

        screen.handle_action(ScreenAction::Nudge(-1));
        assert_eq!(screen.header_visibility(), HeaderVisibility::Shown);
        assert_eq!(screen.list(0).map(|l| l.offset_px()), Some(6.0));
    }

    #[test]
    fn test_nudge_stays_under_threshold_with_tall_rows() {
        let config = ScreenConfig::from_toml_str("[display]\ncell_height_dp = 32.0").unwrap();
        let mut screen =
            DetailScreen::new(&config, Density::from_scale(1.0, 32.0)).expect("screen");
        draw(&mut screen);

        screen.handle_action(ScreenAction::Nudge(-1));
        assert_eq!(screen.header_visibility(), HeaderVisibility::Shown);
        assert_eq!(screen.list(0).map(|l| l.offset_px()), Some(6.0));

        // a whole row of 32px is a real scroll
        screen.handle_action(ScreenAction::ScrollRows {
            rows: -1.0,
            source: ScrollSource::Keyboard,
        });
        assert_eq!(screen.header_visibility(), HeaderVisibility::Hidden);
    }

    #[test]
    fn test_scroll_up_at_top_still_shows_header() {
        let mut screen = screen();
        draw(&mut screen);

        screen.scroll_content(-40.0, ScrollSource::Wheel);
        screen.handle_action(ScreenAction::ScrollToStart);
        assert_eq!(screen.list(0).map(|l| l.offset_px()), Some(0.0));
        assert_eq!(screen.header_visibility(), HeaderVisibility::Shown);

        // nothing left to scroll, the coordinator still sees the delta
        screen.scroll_content(-40.0, ScrollSource::Wheel);
        let consumed = screen.scroll_content(40.0, ScrollSource::Wheel);
        assert_eq!(consumed, Offset::vertical(40.0));
        let consumed = screen.scroll_content(40.0, ScrollSource::Wheel);
        assert_eq!(consumed, Offset::ZERO);
        assert_eq!(screen.header_visibility(), HeaderVisibility::Shown);
        assert!(!screen.top_bar().is_overlapped());
    }

    #[test]
    fn test_header_region_collapses_after_transition() {
        let mut screen = screen();
        draw(&mut screen);
        let full = screen.layout().header.height;

        screen.scroll_content(-20.0, ScrollSource::Drag);
        assert!(screen.is_animating());
        screen.advance(Duration::from_millis(500));
        draw(&mut screen);

        assert_eq!(screen.layout().header.height, 0);
        assert_eq!(screen.layout().pager.height, screen.layout().scaffold.content.height - 2);
        assert!(full > 0);
    }

    #[test]
    fn test_wheel_over_header_toggles_without_scrolling_list() {
        let mut screen = screen();
        draw(&mut screen);
        let header = screen.layout().header;

        screen.handle_mouse(mouse(MouseEventKind::ScrollDown, header.x + 1, header.y));
        assert_eq!(screen.header_visibility(), HeaderVisibility::Hidden);
        assert_eq!(screen.list(0).map(|l| l.offset_px()), Some(0.0));
        // the image claimed the delta, so the bar counts it as content moving
        assert!(screen.top_bar().is_overlapped());

        screen.handle_mouse(mouse(MouseEventKind::ScrollUp, header.x + 1, header.y));
        assert_eq!(screen.header_visibility(), HeaderVisibility::Shown);
        assert!(!screen.top_bar().is_overlapped());
    }

    #[test]
    fn test_vertical_drag_scrolls_content() {
        let mut screen = screen();
        draw(&mut screen);
        let pager = screen.layout().pager;

        screen.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, pager.y + 5));
        screen.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 5, pager.y + 3));
        screen.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 5, pager.y + 3));

        assert_eq!(screen.list(0).map(|l| l.offset_px()), Some(32.0));
        assert_eq!(screen.header_visibility(), HeaderVisibility::Hidden);
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_tab_two_renders_third_list() {
        let mut screen = screen();
        draw(&mut screen);
        screen.scroll_content(-20.0, ScrollSource::Drag);
        let before = screen.header_visibility();

        screen.handle_action(ScreenAction::SelectTab(2));
        tokio::time::sleep(Duration::from_millis(400)).await;
        screen.advance(Duration::from_millis(400));

        assert_eq!(screen.current_page(), 2);
        assert_eq!(screen.pager().position(), 2.0);
        assert_eq!(screen.header_visibility(), before);

        let buffer = draw(&mut screen);
        let pager = screen.layout().pager;
        assert_eq!(row_text(&buffer, pager.y).trim(), "0");
        assert_eq!(row_text(&buffer, pager.y + 2).trim(), "1");
        // the third list has its own untouched scroll state
        assert_eq!(screen.list(2).map(|l| l.offset_px()), Some(0.0));
        assert!(!screen.top_bar().is_overlapped());
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_on_tab_selects_it() {
        let mut screen = screen();
        draw(&mut screen);
        let tabs = screen.layout().tabs;

        screen.handle_mouse(mouse(
            MouseEventKind::Down(MouseButton::Left),
            tabs.x + tabs.width / 2,
            tabs.y,
        ));
        tokio::time::sleep(Duration::from_millis(400)).await;
        screen.advance(Duration::from_millis(16));
        assert_eq!(screen.current_page(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_horizontal_drag_swipes_to_next_page() {
        let mut screen = screen();
        draw(&mut screen);
        let pager = screen.layout().pager;
        let y = pager.y + 4;

        screen.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40, y));
        screen.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 25, y));
        assert!(screen.pager().position() > 0.2);

        screen.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 25, y));
        tokio::time::sleep(Duration::from_millis(400)).await;
        screen.advance(Duration::from_millis(16));

        assert_eq!(screen.current_page(), 1);
        assert_eq!(screen.header_visibility(), HeaderVisibility::Shown);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quick_swipes_chain_from_animation_target() {
        let mut screen = screen();
        draw(&mut screen);

        screen.handle_action(ScreenAction::Swipe(1));
        tokio::time::sleep(Duration::from_millis(48)).await;
        screen.advance(Duration::from_millis(48));
        assert_eq!(screen.current_page(), 0);

        screen.handle_action(ScreenAction::Swipe(1));
        tokio::time::sleep(Duration::from_secs(1)).await;
        screen.advance(Duration::from_millis(16));
        assert_eq!(screen.current_page(), 2);
        assert_eq!(screen.pager().position(), 2.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_swipe_without_animation_uses_current_page() {
        let mut screen = screen();
        draw(&mut screen);

        screen.handle_action(ScreenAction::Swipe(1));
        tokio::time::sleep(Duration::from_secs(1)).await;
        screen.advance(Duration::from_millis(16));
        assert_eq!(screen.current_page(), 1);

        screen.handle_action(ScreenAction::Swipe(-1));
        tokio::time::sleep(Duration::from_secs(1)).await;
        screen.advance(Duration::from_millis(16));
        assert_eq!(screen.current_page(), 0);
    }

    #[test]
    fn test_top_bar_renders_title() {
        let mut screen = screen();
        let buffer = draw(&mut screen);
        assert!(row_text(&buffer, 1).contains("Artist Details"));
        assert!(row_text(&buffer, 1).contains('←'));
    }
}
