//! Menu model, builder and renderable instance.
//!
//! A [`Menu`] accumulates configuration (title, size, theme, surface,
//! buttons). [`Menu::build_instance`] freezes that configuration into a
//! [`MenuInstance`], the only thing a [`MenuBackend`] ever sees. Rendering or
//! running a menu that was never built fails with [`InstanceNotBuiltError`].

use crate::{
    Button, ButtonContext, Coordinate, InputEvent, InstanceNotBuiltError, Key, MenuBackend,
    RunError, SurfaceHandle, ValidationError,
    constants::{TARGET_FPS, WINDOW_HEIGHT, WINDOW_WIDTH},
};

/// Menu colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Light text on a dark panel.
    Dark,
    /// Dark text on a light panel.
    #[default]
    Light,
}

/// Renderable snapshot of a menu's configuration.
///
/// Holds the selection cursor. Every build produces an independent instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuInstance {
    title: String,
    size: Coordinate,
    theme: Theme,
    surface: Option<SurfaceHandle>,
    entries: Vec<String>,
    selected: usize,
}

impl MenuInstance {
    /// Title shown above the entries.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Panel size in window units.
    pub fn size(&self) -> Coordinate {
        self.size
    }

    /// Colour scheme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Target surface. `None` lets the backend pick its primary surface.
    pub fn surface(&self) -> Option<SurfaceHandle> {
        self.surface
    }

    /// Button labels in insertion order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Index of the highlighted entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move the highlight down, wrapping at the end.
    pub fn select_next(&mut self) {
        if !self.entries.is_empty() {
            self.selected = (self.selected + 1) % self.entries.len();
        }
    }

    /// Move the highlight up, wrapping at the start.
    pub fn select_previous(&mut self) {
        if !self.entries.is_empty() {
            self.selected = self.selected.checked_sub(1).unwrap_or(self.entries.len() - 1);
        }
    }

    /// Apply a navigation key. Returns the activated entry on Enter.
    pub fn handle_key(&mut self, key: Key) -> Option<usize> {
        match key {
            Key::Up => {
                self.select_previous();
                None
            },
            Key::Down | Key::Tab => {
                self.select_next();
                None
            },
            Key::Enter => (self.selected < self.entries.len()).then_some(self.selected),
            Key::Char(_) | Key::Esc | Key::Backspace | Key::Left | Key::Right => None,
        }
    }
}

/// A pressed button and the requests its action made.
#[derive(Debug)]
pub struct MenuSelection {
    /// Button label.
    pub name: String,
    /// Requests collected from the action.
    pub context: ButtonContext,
}

/// How a modal [`Menu::run`] ended.
#[derive(Debug)]
pub enum MenuOutcome {
    /// A button was pressed.
    Selected(MenuSelection),
    /// A quit signal arrived.
    Quit,
}

/// Menu configuration, buttons and built instance.
#[derive(Debug)]
pub struct Menu {
    title: String,
    size: Coordinate,
    theme: Theme,
    surface: Option<SurfaceHandle>,
    /// Append-only, insertion order, duplicates allowed.
    buttons: Vec<Button>,
    enabled: bool,
    instance: Option<MenuInstance>,
}

impl Menu {
    /// Enabled, untitled, window-sized menu with no buttons.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            size: Coordinate::from_unsigned(WINDOW_WIDTH, WINDOW_HEIGHT),
            theme: Theme::default(),
            surface: None,
            buttons: Vec::new(),
            enabled: true,
            instance: None,
        }
    }

    /// Configured title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Configured size.
    pub fn size(&self) -> Coordinate {
        self.size
    }

    /// Configured theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Configured surface.
    pub fn surface(&self) -> Option<SurfaceHandle> {
        self.surface
    }

    /// Set the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Set the panel size.
    pub fn set_size(&mut self, size: Coordinate) {
        self.size = size;
    }

    /// Set the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Set the target surface.
    pub fn set_surface(&mut self, surface: SurfaceHandle) {
        self.surface = Some(surface);
    }

    /// Append a button.
    pub fn add_button(&mut self, button: Button) {
        self.buttons.push(button);
    }

    /// Button labels in insertion order.
    pub fn button_names(&self) -> Vec<&str> {
        self.buttons.iter().map(Button::name).collect()
    }

    /// Check the accumulated configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.buttons.iter().any(|b| b.name().is_empty()) {
            return Err(ValidationError::EmptyButtonName);
        }
        Ok(())
    }

    /// Materialize a fresh instance from the current configuration.
    ///
    /// Replaces any previous instance; the selection starts on the first
    /// entry again.
    pub fn build_instance(&mut self) -> &MenuInstance {
        let instance = MenuInstance {
            title: self.title.clone(),
            size: self.size,
            theme: self.theme,
            surface: self.surface,
            entries: self.buttons.iter().map(|b| b.name().to_owned()).collect(),
            selected: 0,
        };
        tracing::debug!(title = %instance.title, entries = instance.entries.len(), "menu built");
        self.instance.insert(instance)
    }

    /// Built instance. `None` before [`Menu::build_instance`].
    pub fn instance(&self) -> Option<&MenuInstance> {
        self.instance.as_ref()
    }

    /// `true` once an instance exists.
    pub fn is_built(&self) -> bool {
        self.instance.is_some()
    }

    /// `true` while the overlay is shown.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Show the overlay.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Hide the overlay.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Draw the instance through `backend`. No-op while disabled.
    pub fn render<B: MenuBackend>(&self, backend: &mut B) -> Result<(), RunError<B::Error>> {
        let instance = self.instance.as_ref().ok_or(InstanceNotBuiltError)?;
        if !self.enabled {
            return Ok(());
        }
        backend.render_menu(instance).map_err(RunError::Backend)
    }

    /// Route a key to the instance and press the activated button, if any.
    ///
    /// A button that asks to close the menu disables it before returning.
    pub fn react(&mut self, key: Key) -> Result<Option<MenuSelection>, InstanceNotBuiltError> {
        let instance = self.instance.as_mut().ok_or(InstanceNotBuiltError)?;
        let Some(index) = instance.handle_key(key) else {
            return Ok(None);
        };
        let Some(button) = self.buttons.get_mut(index) else {
            return Ok(None);
        };

        let name = button.name().to_owned();
        let context = button.press();
        if context.menu_closed() {
            self.enabled = false;
        }
        Ok(Some(MenuSelection { name, context }))
    }

    /// Blocking modal loop: show the menu until a button is pressed or a quit
    /// signal arrives.
    ///
    /// A menu built without a surface gets one of its own from the backend.
    pub fn run<B: MenuBackend>(
        &mut self,
        backend: &mut B,
    ) -> Result<MenuOutcome, RunError<B::Error>> {
        let configured = self.instance.as_ref().ok_or(InstanceNotBuiltError)?.surface();
        let surface = match configured {
            Some(surface) => surface,
            None => {
                let surface = backend.create_surface(self.size).map_err(RunError::Backend)?;
                self.attach_surface(surface);
                surface
            },
        };
        self.enable();

        loop {
            for event in backend.poll_events().map_err(RunError::Backend)? {
                match event {
                    InputEvent::Quit => return Ok(MenuOutcome::Quit),
                    InputEvent::KeyDown(key) => {
                        if let Some(selection) = self.react(key)? {
                            return Ok(MenuOutcome::Selected(selection));
                        }
                    },
                    InputEvent::Click(_) | InputEvent::Resize(..) => {},
                }
            }

            self.render(backend)?;
            backend.present(surface).map_err(RunError::Backend)?;
            backend.tick(TARGET_FPS);
        }
    }

    /// Point the configuration and the built instance at `surface`.
    fn attach_surface(&mut self, surface: SurfaceHandle) {
        self.surface = Some(surface);
        if let Some(instance) = &mut self.instance {
            instance.surface = Some(surface);
        }
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Menu`].
///
/// Setters chain by value. Validation happens in [`MenuBuilder::build`].
#[derive(Debug, Default)]
pub struct MenuBuilder {
    menu: Menu,
}

impl MenuBuilder {
    /// Builder holding a default menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard everything configured so far.
    pub fn reset(&mut self) {
        self.menu = Menu::new();
    }

    /// Set the title.
    #[must_use]
    pub fn set_title(mut self, title: impl Into<String>) -> Self {
        self.menu.set_title(title);
        self
    }

    /// Set the panel size.
    #[must_use]
    pub fn set_size(mut self, width: u32, height: u32) -> Self {
        self.menu.set_size(Coordinate::from_unsigned(width, height));
        self
    }

    /// Set the theme.
    #[must_use]
    pub fn set_theme(mut self, theme: Theme) -> Self {
        self.menu.set_theme(theme);
        self
    }

    /// Alias for `set_theme(Theme::Dark)`.
    #[must_use]
    pub fn set_dark_theme(self) -> Self {
        self.set_theme(Theme::Dark)
    }

    /// Alias for `set_theme(Theme::Light)`.
    #[must_use]
    pub fn set_light_theme(self) -> Self {
        self.set_theme(Theme::Light)
    }

    /// Set the target surface.
    #[must_use]
    pub fn set_surface(mut self, surface: SurfaceHandle) -> Self {
        self.menu.set_surface(surface);
        self
    }

    /// Append a button running `handler`.
    #[must_use]
    pub fn add_button(
        mut self,
        name: impl Into<String>,
        handler: impl FnMut(&mut ButtonContext) + 'static,
    ) -> Self {
        self.menu.add_button(Button::invoke(name, handler));
        self
    }

    /// Append the `Quit` button.
    #[must_use]
    pub fn add_quit_button(mut self) -> Self {
        self.menu.add_button(Button::quit());
        self
    }

    /// Append a button that hides the overlay.
    #[must_use]
    pub fn add_close_button(mut self, name: impl Into<String>) -> Self {
        self.menu.add_button(Button::close(name));
        self
    }

    /// Validate and return the menu without materializing an instance.
    pub fn into_menu(self) -> Result<Menu, ValidationError> {
        self.menu.validate()?;
        Ok(self.menu)
    }

    /// Validate, materialize the instance and return the menu.
    pub fn build(self) -> Result<Menu, ValidationError> {
        let mut menu = self.into_menu()?;
        menu.build_instance();
        Ok(menu)
    }
}
