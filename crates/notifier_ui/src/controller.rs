//! The view controller: picks the active flow, routes input to it and builds screens.
//!
//! [`ViewController::render`] is the only place a flow is (re)built. It runs on
//! start, after onboarding completes, after a language toggle, after "change class"
//! and when a push message arrives while Home is showing. Each run discards the
//! previous flow and its state.

use notifier_common::models::PushPayload;
use notifier_common::Language;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

use crate::command::{AppEvent, Command};
use crate::context::AppContext;
use crate::home::HomeFlow;
use crate::onboarding::OnboardingFlow;
use crate::view::{self, Banner, Body, Screen};

enum ActiveFlow {
    Onboarding(OnboardingFlow),
    Home(HomeFlow),
}

/// Which flow is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Onboarding,
    Home,
}

pub struct ViewController {
    ctx: AppContext,
    events: UnboundedSender<AppEvent>,
    language: Language,
    flow: Option<ActiveFlow>,
    banner: Option<Banner>,
    renders: usize,
}

impl ViewController {
    /// Creates the controller and routes foreground push messages into `events`.
    pub fn new(ctx: AppContext, events: UnboundedSender<AppEvent>) -> Self {
        let push_events = events.clone();
        ctx.push.on_message_received(move |payload| {
            if push_events.send(AppEvent::PushReceived(payload)).is_err() {
                debug!("event loop gone, dropping push message");
            }
        });

        let language = ctx.store.language();
        Self {
            ctx,
            events,
            language,
            flow: None,
            banner: None,
            renders: 0,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn active(&self) -> Option<ActiveView> {
        match self.flow {
            Some(ActiveFlow::Onboarding(_)) => Some(ActiveView::Onboarding),
            Some(ActiveFlow::Home(_)) => Some(ActiveView::Home),
            None => None,
        }
    }

    /// Number of times a flow has been built.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    pub fn home(&self) -> Option<&HomeFlow> {
        match &self.flow {
            Some(ActiveFlow::Home(home)) => Some(home),
            _ => None,
        }
    }

    pub fn onboarding(&self) -> Option<&OnboardingFlow> {
        match &self.flow {
            Some(ActiveFlow::Onboarding(flow)) => Some(flow),
            _ => None,
        }
    }

    /// Builds the flow the persisted state calls for, loads it, and returns its screen.
    pub async fn render(&mut self) -> Screen {
        self.renders += 1;
        self.flow = None;

        let registered = self.ctx.store.is_registered();
        let class = self.ctx.store.class();
        let flow = match class.filter(|_| registered) {
            Some(class) => {
                debug!(class_id = %class.id, "rendering home");
                let mut home = HomeFlow::new(self.ctx.clone(), self.language, class);
                home.load().await;
                ActiveFlow::Home(home)
            }
            None => {
                if registered {
                    warn!("registration flag set without a class, starting onboarding");
                }
                debug!("rendering onboarding");
                let events = self.events.clone();
                let mut onboarding = OnboardingFlow::new(self.ctx.clone(), self.language, move || {
                    if events.send(AppEvent::OnboardingCompleted).is_err() {
                        debug!("event loop gone, dropping onboarding completion");
                    }
                });
                onboarding.load().await;
                ActiveFlow::Onboarding(onboarding)
            }
        };
        self.flow = Some(flow);
        self.screen()
    }

    /// The current screen, built from the active flow without any I/O.
    pub fn screen(&self) -> Screen {
        let strings = &self.ctx.strings;
        let body = match &self.flow {
            Some(ActiveFlow::Home(home)) => {
                Body::Home(view::home_view(home.state(), strings, self.language))
            }
            Some(ActiveFlow::Onboarding(flow)) => {
                Body::Onboarding(view::onboarding_view(flow.state(), strings, self.language))
            }
            None => Body::Onboarding(view::onboarding_view(
                &Default::default(),
                strings,
                self.language,
            )),
        };
        Screen {
            header: view::header(strings, self.language),
            banner: self.banner.clone(),
            body,
        }
    }

    /// Switches between Hebrew and English, persists the choice and re-renders.
    pub async fn toggle_language(&mut self) -> Screen {
        self.language = self.language.toggled();
        if let Err(err) = self.ctx.store.save_language(self.language) {
            warn!("could not persist language: {}", err);
        }
        info!(language = %self.language, "language switched");
        self.render().await
    }

    pub async fn handle_event(&mut self, event: AppEvent) -> Screen {
        match event {
            AppEvent::OnboardingCompleted => self.render().await,
            AppEvent::PushReceived(payload) => self.push_received(payload).await,
        }
    }

    async fn push_received(&mut self, payload: PushPayload) -> Screen {
        let (title, body) = payload
            .notification
            .map(|n| (n.title, n.body))
            .unwrap_or_default();
        self.banner = Some(view::banner(&self.ctx.strings, self.language, &title, &body));

        match self.active() {
            Some(ActiveView::Home) => self.render().await,
            _ => self.screen(),
        }
    }

    pub async fn handle_command(&mut self, command: Command) -> Screen {
        match command {
            Command::ToggleLanguage => return self.toggle_language().await,
            Command::Refresh => return self.render().await,
            Command::DismissBanner => {
                self.banner = None;
                return self.screen();
            }
            _ => {}
        }

        let rerender = match self.flow.as_mut() {
            Some(ActiveFlow::Onboarding(flow)) => {
                Self::onboarding_command(flow, command).await;
                false
            }
            Some(ActiveFlow::Home(home)) => Self::home_command(home, command).await,
            None => true,
        };

        if rerender {
            // "change class" wiped the store, language included
            self.language = self.ctx.store.language();
            self.render().await
        } else {
            self.screen()
        }
    }

    async fn onboarding_command(flow: &mut OnboardingFlow, command: Command) {
        match command {
            Command::Retry => flow.retry().await,
            Command::SelectClass(id) => flow.select_class(&id),
            Command::Next => flow.next().await,
            Command::Back => flow.back(),
            Command::SelectTeacher { subject, teacher } => {
                if !flow.select_teacher(&subject, teacher.as_deref()) {
                    debug!(%subject, "teacher selection ignored");
                }
            }
            Command::Finish => flow.finish().await,
            other => debug!(command = ?other, "not available during onboarding"),
        }
    }

    /// Returns whether the controller has to re-render afterwards.
    async fn home_command(home: &mut HomeFlow, command: Command) -> bool {
        match command {
            Command::Retry => home.retry().await,
            Command::ToggleFilter => home.toggle_filter(),
            Command::OpenSettings => home.open_settings(),
            Command::EditTeachers => home.edit_teachers().await,
            Command::SelectTeacher { subject, teacher } => {
                if !home.select_teacher(&subject, teacher.as_deref()) {
                    debug!(%subject, "teacher selection ignored");
                }
            }
            Command::Save => home.save_teachers().await,
            Command::Back | Command::Cancel => home.close_overlay(),
            Command::TestNotification => home.send_test_notification().await,
            Command::ChangeClass => match home.change_class() {
                Ok(()) => return true,
                Err(err) => warn!("could not clear local state: {}", err),
            },
            other => debug!(command = ?other, "not available on home"),
        }
        false
    }
}
