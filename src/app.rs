// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the archive viewer.
//!
//! The `App` struct wires the page registry and navigation cursor to the
//! Iced event loop: it kicks off the asynchronous archive open, fans out
//! per-entry extraction tasks, routes keyboard and click input to the
//! cursor, and keeps the rendered frame and progress indicator in sync.
//! Policy decisions (key map, click-zone geometry, persistence timing) live
//! close to the update loop so user-facing behavior is easy to audit.

use crate::archive::{ArchiveSource, EntryInfo, ZipSource};
use crate::config::{self, Config, ViewerSettings};
use crate::error::{DecodeError, Error};
use crate::media::{self, RenderedPage};
use crate::navigation::{PageState, ReaderCursor};
use crate::registry::{PageRegistry, SubmitOutcome};
use crate::transform::{self, FitMode, ReadingDirection, ScrollReset, SizeConstraint};
use iced::widget::scrollable::{AbsoluteOffset, Direction, Scrollbar};
use iced::widget::{
    button, mouse_area, progress_bar, Column, Container, Id, Image, Row, Scrollable, Text,
};
use iced::{
    alignment::{Horizontal, Vertical},
    keyboard, window, Element, Length, Point, Size, Subscription, Task, Theme,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;

/// Width of the thumbnail strip on the left.
const SIDEBAR_WIDTH: f32 = 90.0;
/// Height reserved for the controls row plus the progress bar.
const CHROME_HEIGHT: f32 = 70.0;

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Path of the comic archive to open on startup.
    pub file_path: Option<String>,
}

/// A successfully opened archive: shared extraction handle plus the entry
/// listing snapshot the registry is seeded from.
#[derive(Debug, Clone)]
pub struct OpenedArchive {
    source: Arc<Mutex<ZipSource>>,
    listing: Vec<EntryInfo>,
}

/// Top-level messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Archive open completed (or failed terminally).
    ArchiveOpened(Result<OpenedArchive, Error>),
    /// One entry finished extracting, in arbitrary arrival order.
    EntryRead {
        name: String,
        result: Result<Vec<u8>, Error>,
    },
    /// The renderer finished decoding the page at `index`.
    PageRendered {
        index: usize,
        result: Result<RenderedPage, DecodeError>,
    },
    NextPage,
    PrevPage,
    LeftPage,
    RightPage,
    JumpTo(usize),
    RotateClockwise,
    RotateCounterClockwise,
    AdvanceFlip,
    SetFitMode(FitMode),
    ToggleDirection,
    ToggleScrollReset,
    ToggleScrollbar,
    PagePointerMoved(Point),
    PageClicked,
    ProgressPointerMoved(Point),
    ProgressClicked,
    WindowResized(Size),
    DismissNotice,
}

/// Root application state bridging the viewer core and the Iced runtime.
#[derive(Debug)]
pub struct App {
    registry: PageRegistry,
    cursor: ReaderCursor,
    settings: ViewerSettings,
    source: Option<Arc<Mutex<ZipSource>>>,
    archive_name: Option<String>,
    /// Last frame produced by the renderer for the current page.
    rendered: Option<RenderedPage>,
    /// Display index a render task is currently in flight for.
    rendering: Option<usize>,
    /// Encoded-bytes handles for the page list, keyed by entry name.
    thumbnails: HashMap<String, iced::widget::image::Handle>,
    /// Terminal archive-open failure, shown in place of the page area.
    load_error: Option<String>,
    /// One-shot notice when stored settings could not be loaded.
    settings_notice: Option<String>,
    window_size: Size,
    page_pointer: Point,
    progress_pointer: Point,
}

impl Default for App {
    fn default() -> Self {
        Self {
            registry: PageRegistry::new(),
            cursor: ReaderCursor::new(),
            settings: ViewerSettings::default(),
            source: None,
            archive_name: None,
            rendered: None,
            rendering: None,
            thumbnails: HashMap::new(),
            load_error: None,
            settings_notice: None,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            page_pointer: Point::ORIGIN,
            progress_pointer: Point::ORIGIN,
        }
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(400.0, 300.0)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn page_scroll_id() -> Id {
    Id::new("comiced-page")
}

/// Splits the progress fraction into layout portions `(empty, filled)`
/// summing to 1000, for the right-anchored fill.
fn progress_portions(fraction: f32) -> (u16, u16) {
    let filled = (fraction.clamp(0.0, 1.0) * 1000.0).round() as u16;
    (1000 - filled, filled)
}

/// Opens the archive file and snapshots its listing. Runs inside a task.
fn open_archive(path: &str) -> Result<OpenedArchive, Error> {
    let bytes = std::fs::read(path)?;
    let source = ZipSource::open(bytes)?;
    let listing = source.entries().to_vec();
    Ok(OpenedArchive {
        source: Arc::new(Mutex::new(source)),
        listing,
    })
}

fn read_entry(source: &Arc<Mutex<ZipSource>>, index: usize) -> Result<Vec<u8>, Error> {
    let mut guard = match source.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    guard.read_entry(index).map_err(Error::from)
}

/// Keyboard map, matching the classic reader bindings: arrows page through
/// (direction-remapped), Space/Shift+Space page forward/back, R/L rotate,
/// F advances the flip cycle, B/W/H/N select the fit mode. Chorded letters
/// are left to the runtime.
fn handle_key_press(key: keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    use keyboard::key::Named;

    let has_modifier =
        modifiers.control() || modifiers.logo() || modifiers.alt() || modifiers.shift();

    match key.as_ref() {
        keyboard::Key::Named(Named::ArrowLeft) if !has_modifier => Some(Message::LeftPage),
        keyboard::Key::Named(Named::ArrowRight) if !has_modifier => Some(Message::RightPage),
        keyboard::Key::Named(Named::Space) => Some(if modifiers.shift() {
            Message::PrevPage
        } else {
            Message::NextPage
        }),
        keyboard::Key::Character(c) if !has_modifier => match c {
            "r" => Some(Message::RotateClockwise),
            "l" => Some(Message::RotateCounterClockwise),
            "f" => Some(Message::AdvanceFlip),
            "b" => Some(Message::SetFitMode(FitMode::Best)),
            "w" => Some(Message::SetFitMode(FitMode::Width)),
            "h" => Some(Message::SetFitMode(FitMode::Height)),
            "n" => Some(Message::SetFitMode(FitMode::None)),
            _ => None,
        },
        _ => None,
    }
}

impl App {
    /// Initializes state from persisted settings and optionally kicks off
    /// the asynchronous archive open for the path given on the CLI.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut app = App::default();

        match config::load() {
            Ok(stored) => app.settings = stored.merge_over_defaults(),
            Err(err) => {
                eprintln!("Failed to load settings: {}", err);
                app.settings_notice =
                    Some(format!("Could not load settings, using defaults ({})", err));
            }
        }

        let task = if let Some(path) = flags.file_path {
            app.archive_name = Some(path.clone());
            Task::perform(async move { open_archive(&path) }, Message::ArchiveOpened)
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        match &self.archive_name {
            Some(name) => format!("comiced — {}", name),
            None => "comiced".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let keys = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                handle_key_press(key, modifiers)
            }
            _ => None,
        });
        let resizes = window::resize_events().map(|(_id, size)| Message::WindowResized(size));
        Subscription::batch([keys, resizes])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ArchiveOpened(Ok(opened)) => self.handle_archive_opened(opened),
            Message::ArchiveOpened(Err(err)) => {
                eprintln!("Failed to open archive: {}", err);
                self.load_error = Some(err.to_string());
                Task::none()
            }
            Message::EntryRead { name, result } => self.handle_entry_read(name, result),
            Message::PageRendered { index, result } => self.handle_page_rendered(index, result),

            Message::NextPage => {
                let moved = self.cursor.show_next(&self.registry);
                self.after_navigation(moved)
            }
            Message::PrevPage => {
                let moved = self.cursor.show_prev(&self.registry);
                self.after_navigation(moved)
            }
            Message::LeftPage => {
                let moved = self.cursor.show_left(&self.registry, self.settings.direction);
                self.after_navigation(moved)
            }
            Message::RightPage => {
                let moved = self
                    .cursor
                    .show_right(&self.registry, self.settings.direction);
                self.after_navigation(moved)
            }
            Message::JumpTo(index) => {
                let moved = self.cursor.jump_to(&self.registry, index);
                self.after_navigation(moved)
            }

            Message::RotateClockwise => {
                self.settings.rotation = self.settings.rotation.clockwise();
                self.apply_transform_change()
            }
            Message::RotateCounterClockwise => {
                self.settings.rotation = self.settings.rotation.counter_clockwise();
                self.apply_transform_change()
            }
            Message::AdvanceFlip => {
                self.settings.flip = self.settings.flip.advance();
                self.apply_transform_change()
            }
            Message::SetFitMode(mode) => {
                // Geometry only; the decoded frame stays valid.
                self.settings.fit_mode = mode;
                self.persist_settings();
                Task::none()
            }
            Message::ToggleDirection => {
                self.settings.direction = match self.settings.direction {
                    ReadingDirection::LeftToRight => ReadingDirection::RightToLeft,
                    ReadingDirection::RightToLeft => ReadingDirection::LeftToRight,
                };
                self.persist_settings();
                Task::none()
            }
            Message::ToggleScrollReset => {
                self.settings.scroll_reset = match self.settings.scroll_reset {
                    ScrollReset::ResetTop => ScrollReset::Preserve,
                    ScrollReset::Preserve => ScrollReset::ResetTop,
                };
                self.persist_settings();
                Task::none()
            }
            Message::ToggleScrollbar => {
                self.settings.show_scrollbar = !self.settings.show_scrollbar;
                self.persist_settings();
                Task::none()
            }

            Message::PagePointerMoved(point) => {
                self.page_pointer = point;
                Task::none()
            }
            Message::PageClicked => self.handle_page_click(),
            Message::ProgressPointerMoved(point) => {
                self.progress_pointer = point;
                Task::none()
            }
            Message::ProgressClicked => self.handle_progress_click(),

            Message::WindowResized(size) => {
                self.window_size = size;
                Task::none()
            }
            Message::DismissNotice => {
                self.settings_notice = None;
                Task::none()
            }
        }
    }

    /// Seeds a fresh registry from the listing and fans out one extraction
    /// task per file entry. Completions arrive in any order.
    fn handle_archive_opened(&mut self, opened: OpenedArchive) -> Task<Message> {
        self.registry.release_all();
        self.registry = PageRegistry::from_listing(&opened.listing);
        self.cursor.reset();
        self.rendered = None;
        self.rendering = None;
        self.thumbnails.clear();
        self.load_error = None;

        let source = opened.source;
        let tasks: Vec<Task<Message>> = opened
            .listing
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is_file)
            .map(|(index, entry)| {
                let source = Arc::clone(&source);
                let name = entry.name.clone();
                Task::perform(
                    async move { read_entry(&source, index) },
                    move |result| Message::EntryRead {
                        name: name.clone(),
                        result,
                    },
                )
            })
            .collect();

        self.source = Some(source);
        Task::batch(tasks)
    }

    fn handle_entry_read(&mut self, name: String, result: Result<Vec<u8>, Error>) -> Task<Message> {
        match result {
            Ok(bytes) => {
                if let SubmitOutcome::Accepted { index } = self.registry.submit(&name, bytes) {
                    if let Some(page) = self.registry.page(index) {
                        // Raster thumbnails only; the runtime decodes these
                        // handles lazily for the page list.
                        if page.mime() != "image/svg+xml" {
                            self.thumbnails.insert(
                                name.clone(),
                                iced::widget::image::Handle::from_bytes(
                                    page.handle().bytes().to_vec(),
                                ),
                            );
                        }
                    }
                }
            }
            Err(err) => {
                eprintln!("Failed to extract '{}': {}", name, err);
                self.registry.reject_unreadable(&name);
            }
        }
        // Display indices shift when a rejection compacts the sequence, so
        // the render condition is re-checked after every registry change
        // rather than keyed off the submitted entry's own index.
        self.render_if_pending()
    }

    fn handle_page_rendered(
        &mut self,
        index: usize,
        result: Result<RenderedPage, DecodeError>,
    ) -> Task<Message> {
        // A stale completion for a page we already navigated away from.
        if index != self.cursor.current() {
            return Task::none();
        }
        self.rendering = None;
        match result {
            Ok(page) => self.rendered = Some(page),
            Err(err) => {
                eprintln!("{}", err);
                self.cursor.mark_decode_failed(&err.name);
                self.rendered = None;
            }
        }
        Task::none()
    }

    /// Renders the page under the cursor unless a frame is already shown or
    /// a render task for it is in flight.
    fn render_if_pending(&mut self) -> Task<Message> {
        if self.rendered.is_none() && self.rendering != Some(self.cursor.current()) {
            self.render_current()
        } else {
            Task::none()
        }
    }

    /// Spawns a render task for the page under the cursor, if it is ready.
    fn render_current(&mut self) -> Task<Message> {
        let index = self.cursor.current();
        if self.cursor.page_state(&self.registry) != PageState::Ready {
            return Task::none();
        }
        let Some(page) = self.registry.page(index) else {
            return Task::none();
        };

        let name = page.name().to_string();
        let bytes = page.handle().share();
        let rotation = self.settings.rotation;
        let hflip = self.settings.flip.hflip();
        let vflip = self.settings.flip.vflip();

        self.rendering = Some(index);
        Task::perform(
            async move { media::render_page(&name, &bytes, rotation, hflip, vflip) },
            move |result| Message::PageRendered { index, result },
        )
    }

    fn after_navigation(&mut self, moved: bool) -> Task<Message> {
        if !moved {
            return Task::none();
        }
        self.rendered = None;
        self.rendering = None;
        let render = self.render_current();
        let scroll = match self.settings.scroll_reset {
            ScrollReset::ResetTop => iced::widget::operation::scroll_to(
                page_scroll_id(),
                AbsoluteOffset { x: 0.0, y: 0.0 },
            ),
            ScrollReset::Preserve => Task::none(),
        };
        Task::batch([render, scroll])
    }

    fn apply_transform_change(&mut self) -> Task<Message> {
        self.persist_settings();
        self.rendered = None;
        self.rendering = None;
        self.render_current()
    }

    fn persist_settings(&self) {
        if let Err(err) = config::save(&Config::from_settings(&self.settings)) {
            eprintln!("Failed to save settings: {}", err);
        }
    }

    fn page_area_size(&self) -> Size {
        Size::new(
            (self.window_size.width - SIDEBAR_WIDTH).max(1.0),
            (self.window_size.height - CHROME_HEIGHT).max(1.0),
        )
    }

    fn handle_page_click(&mut self) -> Task<Message> {
        let area = self.page_area_size();
        let side = transform::click_zone(
            self.settings.rotation,
            self.page_pointer.x,
            self.page_pointer.y,
            area.width,
            area.height,
        );
        let moved = self
            .cursor
            .show_side(&self.registry, self.settings.direction, side);
        self.after_navigation(moved)
    }

    fn handle_progress_click(&mut self) -> Task<Message> {
        let total = self.registry.expected_total();
        if total == 0 {
            return Task::none();
        }

        // The bar spans the full window width; pointer coordinates are
        // relative to the bar itself.
        let width = self.window_size.width.max(1.0);
        let mut rate = (self.progress_pointer.x / width).clamp(0.0, 1.0);
        if self.settings.direction == ReadingDirection::RightToLeft {
            rate = 1.0 - rate;
        }
        let target = ((rate * total as f32).ceil() as usize).max(1) - 1;
        let moved = self.cursor.jump_to(&self.registry, target);
        self.after_navigation(moved)
    }

    // =======================================================================
    // View
    // =======================================================================

    fn view(&self) -> Element<'_, Message> {
        let mut root = Column::new();

        if let Some(notice) = &self.settings_notice {
            root = root.push(
                Row::new()
                    .push(Text::new(notice.clone()).width(Length::Fill))
                    .push(button(Text::new("Dismiss")).on_press(Message::DismissNotice))
                    .padding(6)
                    .align_y(Vertical::Center),
            );
        }

        let body = Row::new()
            .push(self.view_thumbnails())
            .push(self.view_page_area());

        root = root
            .push(Container::new(body).width(Length::Fill).height(Length::Fill))
            .push(self.view_controls())
            .push(self.view_progress());

        Container::new(root)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Table of contents: one numbered entry per accepted page, in display
    /// order. Clicking jumps straight to that page.
    fn view_thumbnails(&self) -> Element<'_, Message> {
        let mut list = Column::new().spacing(4).padding(6);

        // Page numbers match the reader's progress display; pages whose
        // bytes the runtime cannot preview fall back to the number alone.
        for (index, page) in self.registry.ready_pages() {
            let label = if index == self.cursor.current() {
                format!("▶ {}", index + 1)
            } else {
                format!("{}", index + 1)
            };

            let mut entry = Column::new().spacing(2);
            if let Some(handle) = self.thumbnails.get(page.name()) {
                entry = entry.push(Image::new(handle.clone()).width(Length::Fill));
            }
            entry = entry.push(Text::new(label).size(14));

            list = list.push(
                button(entry)
                    .width(Length::Fill)
                    .on_press(Message::JumpTo(index)),
            );
        }

        let strip = Scrollable::new(list)
            .width(Length::Fixed(SIDEBAR_WIDTH))
            .height(Length::Fill);

        Container::new(strip)
            .width(Length::Fixed(SIDEBAR_WIDTH))
            .height(Length::Fill)
            .into()
    }

    fn view_page_area(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match self.cursor.page_state(&self.registry) {
            PageState::Empty => {
                let message = match &self.load_error {
                    Some(err) => err.clone(),
                    None if self.archive_name.is_some() => "Opening archive…".to_string(),
                    None => "No archive loaded".to_string(),
                };
                Text::new(message).size(20).into()
            }
            PageState::Loading => {
                Text::new(format!("Loading Page #{}", self.cursor.current() + 1))
                    .size(20)
                    .into()
            }
            PageState::Error => {
                let name = self
                    .registry
                    .page(self.cursor.current())
                    .map(|page| page.name().to_string())
                    .unwrap_or_default();
                Text::new(format!(
                    "Unable to display page #{} ({})",
                    self.cursor.current() + 1,
                    name
                ))
                .size(20)
                .into()
            }
            PageState::Ready => match &self.rendered {
                Some(RenderedPage::Bitmap {
                    width,
                    height,
                    rgba,
                }) => self.view_bitmap(*width, *height, rgba.clone()),
                Some(RenderedPage::Text(body)) => Text::new(body.clone()).size(14).into(),
                // Render task still in flight.
                None => Text::new(format!("Loading Page #{}", self.cursor.current() + 1))
                    .size(20)
                    .into(),
            },
        };

        let centered = Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center);

        let scrollbar = if self.settings.show_scrollbar {
            Scrollbar::default()
        } else {
            Scrollbar::hidden()
        };

        let page_scroll = Scrollable::new(centered)
            .id(page_scroll_id())
            .width(Length::Fill)
            .height(Length::Fill)
            .direction(Direction::Vertical(scrollbar));

        mouse_area(page_scroll)
            .on_move(Message::PagePointerMoved)
            .on_press(Message::PageClicked)
            .into()
    }

    fn view_bitmap(&self, width: u32, height: u32, rgba: Vec<u8>) -> Element<'_, Message> {
        let handle = iced::widget::image::Handle::from_rgba(width, height, rgba);
        let constraint: SizeConstraint = self
            .settings
            .fit_mode
            .size_constraints(self.window_size.height);

        let mut image = Image::new(handle);
        if constraint.width_fill || constraint.max_width_fill {
            image = image.width(Length::Fill);
        }
        if let Some(px) = constraint.height_px.or(constraint.max_height_px) {
            image = image.height(Length::Fixed(px));
        }
        image = image.content_fit(if constraint == SizeConstraint::default() {
            iced::ContentFit::None
        } else {
            iced::ContentFit::Contain
        });

        image.into()
    }

    fn view_controls(&self) -> Element<'_, Message> {
        let direction_label = match self.settings.direction {
            ReadingDirection::LeftToRight => "LTR",
            ReadingDirection::RightToLeft => "RTL",
        };
        let scroll_label = match self.settings.scroll_reset {
            ScrollReset::ResetTop => "Scroll: top",
            ScrollReset::Preserve => "Scroll: keep",
        };
        let scrollbar_label = if self.settings.show_scrollbar {
            "Bar: on"
        } else {
            "Bar: off"
        };

        Row::new()
            .spacing(6)
            .padding(6)
            .push(button(Text::new("⟲")).on_press(Message::RotateCounterClockwise))
            .push(button(Text::new("⟳")).on_press(Message::RotateClockwise))
            .push(button(Text::new("Flip")).on_press(Message::AdvanceFlip))
            .push(button(Text::new("Best")).on_press(Message::SetFitMode(FitMode::Best)))
            .push(button(Text::new("Width")).on_press(Message::SetFitMode(FitMode::Width)))
            .push(button(Text::new("Height")).on_press(Message::SetFitMode(FitMode::Height)))
            .push(button(Text::new("1:1")).on_press(Message::SetFitMode(FitMode::None)))
            .push(button(Text::new(direction_label)).on_press(Message::ToggleDirection))
            .push(button(Text::new(scroll_label)).on_press(Message::ToggleScrollReset))
            .push(button(Text::new(scrollbar_label)).on_press(Message::ToggleScrollbar))
            .push(
                Text::new(self.page_indicator())
                    .width(Length::Fill)
                    .align_x(Horizontal::Right),
            )
            .into()
    }

    fn page_indicator(&self) -> String {
        let total = self.registry.expected_total();
        if total == 0 {
            String::new()
        } else {
            format!("{}/{}", self.cursor.current() + 1, total)
        }
    }

    fn view_progress(&self) -> Element<'_, Message> {
        let fraction = self.cursor.progress_fraction(&self.registry);

        // The fill anchors at the reading edge: left for LTR, right for
        // RTL. The fraction itself is the same either way.
        let bar: Element<'_, Message> = match self.settings.direction {
            ReadingDirection::LeftToRight => progress_bar(0.0..=1.0, fraction)
                .girth(Length::Fixed(14.0))
                .into(),
            ReadingDirection::RightToLeft => {
                let (empty, filled) = progress_portions(fraction);
                let mut row = Row::new();
                if empty > 0 {
                    row = row.push(
                        progress_bar(0.0..=1.0, 0.0)
                            .girth(Length::Fixed(14.0))
                            .length(Length::FillPortion(empty)),
                    );
                }
                if filled > 0 {
                    row = row.push(
                        progress_bar(0.0..=1.0, 1.0)
                            .girth(Length::Fixed(14.0))
                            .length(Length::FillPortion(filled)),
                    );
                }
                row.into()
            }
        };

        mouse_area(bar)
            .on_move(Message::ProgressPointerMoved)
            .on_press(Message::ProgressClicked)
            .into()
    }
}
