use eframe::CreationContext;
use egui::{Key, TopBottomPanel};

use crate::{
    clipboard::Clipboard,
    config::Config,
    error::{CatalogError, DispatchError},
    games::Catalog,
    model::Message,
    relay,
    resolver::{Fut, Pending},
    runtime::ImageCache,
    secret::Secret,
    state::{Builder, Generator, Preferences, SavedState, Tab, View, WebhookForm},
    storage,
    toast::{Level, Toasts},
    views::{BuilderView, GeneratorView},
};

/// The outcome of a webhook request, tagged with where it came from.
pub struct Dispatched {
    pub tab: Tab,
    pub edit: bool,
    pub result: Result<(), DispatchError>,
}

impl Dispatched {
    fn report(self, toasts: &mut Toasts) {
        match (self.result, self.edit) {
            (Ok(()), true) => toasts.success("Message edited successfully."),
            (Ok(()), false) if self.tab == Tab::Generator => {
                toasts.success("Successfully sent embed.")
            }
            (Ok(()), false) => toasts.success("Successfully sent data."),
            (Err(err), edit) => {
                log::warn!("webhook request failed: {err}");
                let (title, description) = match (edit, self.tab) {
                    (true, _) => (
                        "Failed to edit message.",
                        "The message ID, webhook URL, or data might be invalid.",
                    ),
                    (false, Tab::Generator) => {
                        ("Failed to send JSON Data.", "The webhook might be invalid.")
                    }
                    (false, Tab::Builder) => (
                        "Failed to send JSON Data.",
                        "The webhook or data might be invalid.",
                    ),
                };
                toasts.error(title, description)
            }
        }
    }
}

pub struct App {
    pub(crate) view: View,
    pub(crate) builder: Builder,
    pub(crate) builder_webhook: WebhookForm,
    pub(crate) generator: Generator,
    pub(crate) generator_webhook: WebhookForm,
    pub(crate) images: ImageCache,
    pub(crate) toasts: Toasts,

    pub(crate) dispatch: Pending<Dispatched>,
    pub(crate) catalog: Pending<Result<Catalog, CatalogError>>,

    config: Config,
    storage: storage::Connection,
    secret: Secret,
    relay: relay::Client,
    http: reqwest::Client,
    clipboard: Clipboard,
    ctx: egui::Context,
}

impl App {
    pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

    pub fn create(
        cc: &CreationContext,
        config: Config,
        storage: storage::Connection,
    ) -> Box<dyn eframe::App> {
        let ctx = cc.egui_ctx.clone();
        let http = crate::default_http_client();
        let secret = Secret::from_passphrase(&config.secret);

        let local = storage.local();
        let prefs = Preferences::load(&local).unwrap_or_else(|err| {
            log::warn!("cannot load preferences, using defaults: {err}");
            Preferences::default()
        });
        let webhook = local.load_webhook(&secret).unwrap_or_else(|err| {
            log::warn!("cannot restore the saved webhook: {err}");
            None
        });

        let mut this = Self {
            view: SavedState::load(&config.state_path).unwrap_or_default(),
            builder: Builder::default(),
            builder_webhook: WebhookForm::with_url(webhook.unwrap_or_default()),
            generator: Generator::new(prefs),
            generator_webhook: WebhookForm::default(),
            images: ImageCache::new(http.clone(), ctx.clone()),
            toasts: Toasts::default(),

            dispatch: Pending::default(),
            catalog: Pending::default(),

            relay: relay::Client::new(http.clone(), config.relay_url.clone()),
            config,
            storage,
            secret,
            http,
            clipboard: Clipboard::default(),
            ctx,
        };

        this.reload_catalog();
        Box::new(this)
    }

    pub fn catalog_source(&self) -> Option<&crate::games::Source> {
        self.config.catalog.as_ref()
    }

    pub fn reload_catalog(&mut self) {
        let Some(source) = self.config.catalog.clone() else {
            log::info!("no catalog configured, set '{}' to load one", Config::CATALOG);
            return;
        };

        log::info!("loading catalog from {source}");
        let http = self.http.clone();
        self.catalog.start(Fut::spawn(
            async move { source.load(&http).await },
            self.ctx.clone(),
        ));
    }

    pub fn send(&mut self, tab: Tab) {
        let (form, message): (_, &Message) = match tab {
            Tab::Builder => (&self.builder_webhook, self.builder.message()),
            Tab::Generator => (&self.generator_webhook, self.generator.message()),
        };

        let request = match form.request(message) {
            Ok(request) => request,
            Err(err) => {
                log::debug!("not sending: {err}");
                let title = match err {
                    DispatchError::MissingMessageId => "Insert a message ID.",
                    _ => "Insert a webhook.",
                };
                return self.toasts.push(Level::Error, title, None);
            }
        };

        let relay = self.relay.clone();
        let edit = request.is_edit();
        self.dispatch.start(Fut::spawn(
            async move {
                let result = relay.execute(&request).await;
                Dispatched { tab, edit, result }
            },
            self.ctx.clone(),
        ));
    }

    pub fn copy_json(&mut self, tab: Tab) {
        let json = match tab {
            Tab::Builder => self.builder.export(),
            Tab::Generator => crate::games::to_json(self.generator.message()),
        };

        let result = json
            .map_err(|err| err.to_string())
            .and_then(|json| self.clipboard.write_text(json).map_err(|err| err.to_string()));

        match result {
            Ok(()) => self.toasts.success("Copied to clipboard"),
            Err(err) => self.toasts.error("Failed to copy to clipboard", err),
        }
    }

    pub fn import_from_clipboard(&mut self) {
        let text = match self.clipboard.read_text() {
            Ok(text) => text,
            Err(err) => return self.toasts.error("Failed to read clipboard", err.to_string()),
        };

        match self.builder.import(&text) {
            Ok(()) => self.toasts.success("Loaded from clipboard"),
            Err(err) => self.toasts.error(err.title(), err.description()),
        }
    }

    pub fn paste_webhook(&mut self, tab: Tab) {
        match self.clipboard.read_text() {
            Ok(text) => self.webhook_mut(tab).url = text.trim().to_string(),
            Err(err) => log::warn!("failed to paste: {err}"),
        }
    }

    pub fn save_webhook(&mut self) {
        self.builder_webhook.confirm_save = false;
        let url = self.builder_webhook.url.trim();
        match self.storage.local().save_webhook(&self.secret, url) {
            Ok(()) => self.toasts.success("Webhook saved locally"),
            Err(err) => self.toasts.error("Failed to save webhook", err.to_string()),
        }
    }

    pub fn webhook_mut(&mut self, tab: Tab) -> &mut WebhookForm {
        match tab {
            Tab::Builder => &mut self.builder_webhook,
            Tab::Generator => &mut self.generator_webhook,
        }
    }

    fn poll(&mut self) {
        self.images.poll();

        if let Some(dispatched) = self.dispatch.poll() {
            dispatched.report(&mut self.toasts);
        }

        match self.catalog.poll() {
            Some(Ok(catalog)) => {
                log::info!(
                    "loaded {} current and {} upcoming game(s)",
                    catalog.current_games.len(),
                    catalog.next_games.len()
                );
                self.generator.set_catalog(catalog);
            }
            Some(Err(err)) => self.toasts.error("Failed to load games", err.to_string()),
            None => {}
        }
    }

    fn persist_preferences(&mut self) {
        if let Some(prefs) = self.generator.take_unsaved() {
            if let Err(err) = prefs.save(&self.storage.local()) {
                log::warn!("cannot save preferences: {err}");
            }
        }
    }

    fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_released(Key::F12)) {
            ctx.set_debug_on_hover(!ctx.debug_on_hover())
        }
    }

    fn display_tab_bar(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.view.tab, Tab::Builder, "Embed Builder");
                ui.selectable_value(&mut self.view.tab, Tab::Generator, "Free Games");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    use crate::state::PreviewMode;
                    let mode = self.view.preview_mut();
                    ui.selectable_value(mode, PreviewMode::Json, "JSON");
                    ui.selectable_value(mode, PreviewMode::Discord, "Preview");
                });
            });
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_input(ctx);
        self.poll();

        self.display_tab_bar(ctx);
        match self.view.tab {
            Tab::Builder => BuilderView { app: self }.display(ctx),
            Tab::Generator => GeneratorView { app: self }.display(ctx),
        }

        self.persist_preferences();
        self.toasts.show(ctx);
    }

    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        SavedState { view: &self.view }.save(&self.config.state_path);
    }

    fn persist_egui_memory(&self) -> bool {
        false
    }
}
