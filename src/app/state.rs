use super::status::StatusLines;
use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Categories,
    Scripts,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Install,
    Update,
    Reinstall,
    Delete,
    Back,
}

impl MenuAction {
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Install => "Install",
            MenuAction::Update => "Update",
            MenuAction::Reinstall => "Reinstall",
            MenuAction::Delete => "Delete",
            MenuAction::Back => "Back",
        }
    }

    /// Choices offered for a script in the given state, always ending with `Back`.
    pub fn options_for(status: ScriptStatus) -> Vec<MenuAction> {
        let mut options = match status {
            ScriptStatus::NotInstalled => vec![MenuAction::Install],
            ScriptStatus::UpdateAvailable => {
                vec![MenuAction::Update, MenuAction::Reinstall, MenuAction::Delete]
            }
            ScriptStatus::UpToDate => vec![MenuAction::Reinstall, MenuAction::Delete],
        };
        options.push(MenuAction::Back);
        options
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionMenu {
    pub options: Vec<MenuAction>,
    pub selected: usize,
}

impl ActionMenu {
    pub fn selected_action(&self) -> Option<MenuAction> {
        self.options.get(self.selected).copied()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.options.iter().map(|o| o.label()).collect()
    }
}

/// Screen regions waiting for a redraw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirtyFlags {
    pub categories: bool,
    pub scripts: bool,
    pub menu: bool,
}

impl DirtyFlags {
    pub fn any(&self) -> bool {
        self.categories || self.scripts || self.menu
    }
}

#[derive(Debug, Default)]
pub(super) struct Popup {
    pub(super) message: String,
    /// Clock time at which a showing message is cleared; 0 when not armed.
    pub(super) clear_at: u64,
}

#[derive(Debug, Default)]
pub(super) struct ScrollState {
    pub(super) name: usize,
    pub(super) description: usize,
    pub(super) last_tick: u64,
}

pub struct App {
    pub(super) config: AppConfig,
    pub(super) store: Store,
    pub(super) client: CatalogClient,
    pub(super) device: DeviceProfile,

    pub(super) catalog: CategoryIndex,
    pub(super) versions: InstalledVersions,
    pub(super) updates: CategoryListing,
    pub(super) scripts: Vec<AppEntry>,

    pub(super) view: View,
    /// Selection in whichever list the current view shows.
    pub(super) current: usize,
    pub(super) last_category_index: usize,
    pub(super) selected_category: Option<Category>,
    pub(super) menu: Option<ActionMenu>,

    pub(super) dirty: DirtyFlags,
    pub(super) popup: Popup,
    pub(super) scroll: ScrollState,
    pub(super) status: StatusLines,

    pub(super) downloading: bool,
    /// Set by anything that blocked the loop; keys pressed meanwhile are dropped.
    pub(super) blocked: bool,
    pub(super) quit: bool,
}

impl App {
    pub fn new(config: AppConfig, store: Store, client: CatalogClient, device: DeviceProfile) -> Self {
        let status = StatusLines::new(config.title.clone());
        Self {
            config,
            store,
            client,
            device,
            catalog: CategoryIndex::default(),
            versions: InstalledVersions::default(),
            updates: CategoryListing::default(),
            scripts: Vec::new(),
            view: View::Categories,
            current: 0,
            last_category_index: 0,
            selected_category: None,
            menu: None,
            dirty: DirtyFlags::default(),
            popup: Popup::default(),
            scroll: ScrollState::default(),
            status,
            downloading: false,
            blocked: false,
            quit: false,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn menu(&self) -> Option<&ActionMenu> {
        self.menu.as_ref()
    }

    pub fn dirty(&self) -> DirtyFlags {
        self.dirty
    }

    pub fn popup_message(&self) -> &str {
        &self.popup.message
    }

    pub fn catalog(&self) -> &CategoryIndex {
        &self.catalog
    }

    pub fn scripts(&self) -> &[AppEntry] {
        &self.scripts
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.selected_category.as_ref()
    }

    pub fn versions(&self) -> &InstalledVersions {
        &self.versions
    }

    pub fn updates(&self) -> &CategoryListing {
        &self.updates
    }

    pub fn scroll_offsets(&self) -> (usize, usize) {
        (self.scroll.name, self.scroll.description)
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn status_lines(&self) -> (&str, &str) {
        self.status.lines()
    }
}
