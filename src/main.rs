use iced::widget::{column, container, scrollable};
use iced::{event, window, Alignment, Element, Event, Length, Subscription, Task, Theme};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

mod config;
mod error;
mod gemini;
mod intake;
mod state;
mod ui;

use config::Config;
use error::{EditError, IntakeError};
use gemini::GeminiClient;
use state::{Session, UploadedImage};
use ui::Surface;

/// Main application state
struct ImageEditor {
    /// Image, prompt, result and error; every transition goes through it
    session: Session,
    /// Client for the edit service, cloned into each request task
    client: GeminiClient,
    /// A file is being dragged over the window
    hovering: bool,
    /// Token of the file read in progress; further picks and drops are ignored until it lands
    intake_pending: Option<u64>,
    /// Last read token handed out, so a read that lands after a reset is discarded
    last_intake: u64,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked "Choose a file"
    PickImage,
    /// File picker closed (None if cancelled)
    FileChosen(Option<PathBuf>),
    FileHovered,
    FilesHoveredLeft,
    FileDropped(PathBuf),
    /// Background file read finished; carries the token it was started with
    ImageLoaded(u64, Result<UploadedImage, IntakeError>),
    /// Invalid-file warning closed
    WarningDismissed,
    PromptChanged(String),
    Submit,
    /// Edit request resolved; carries the token it was dispatched with
    EditFinished(u64, Result<Option<String>, EditError>),
    /// "Choose another image"
    Reset,
}

impl ImageEditor {
    /// Create a new instance of the application
    fn new(client: GeminiClient) -> (Self, Task<Message>) {
        info!("🎨 Image editor ready (model: {})", client.model());

        (
            ImageEditor {
                session: Session::new(),
                client,
                hovering: false,
                intake_pending: None,
                last_intake: 0,
            },
            Task::none(),
        )
    }

    /// Validate a picked or dropped file and start reading it
    fn start_intake(&mut self, path: PathBuf) -> Task<Message> {
        if self.session.is_busy() || self.intake_pending.is_some() {
            info!("Ignoring {} while busy", path.display());
            return Task::none();
        }

        // Reject on the declared type before touching the file
        if let Err(e) = intake::declared_mime_type(&path) {
            warn!("⚠️  Rejected {}: {}", path.display(), e);
            return warn_user(e);
        }

        self.last_intake += 1;
        let token = self.last_intake;
        self.intake_pending = Some(token);
        Task::perform(intake::load_image(path), move |result| {
            Message::ImageLoaded(token, result)
        })
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImage => {
                if self.session.is_busy() || self.intake_pending.is_some() {
                    return Task::none();
                }
                Task::perform(intake::pick_image_file(), Message::FileChosen)
            }
            Message::FileChosen(Some(path)) => self.start_intake(path),
            Message::FileChosen(None) => Task::none(),
            Message::FileHovered => {
                self.hovering = true;
                Task::none()
            }
            Message::FilesHoveredLeft => {
                self.hovering = false;
                Task::none()
            }
            Message::FileDropped(path) => {
                self.hovering = false;
                self.start_intake(path)
            }
            Message::ImageLoaded(token, result) => {
                if self.intake_pending != Some(token) {
                    debug!("Discarding stale file read #{}", token);
                    return Task::none();
                }
                self.intake_pending = None;

                match result {
                    Ok(image) => {
                        let name = image.file_name.clone();
                        if self.session.upload_image(image) {
                            Task::none()
                        } else {
                            warn_user(IntakeError::Busy(name))
                        }
                    }
                    Err(e) => {
                        warn!("⚠️  Intake failed: {}", e);
                        warn_user(e)
                    }
                }
            }
            Message::WarningDismissed => Task::none(),
            Message::PromptChanged(text) => {
                self.session.set_prompt(text);
                Task::none()
            }
            Message::Submit if self.intake_pending.is_some() => {
                debug!("Submit ignored while a new file is being read");
                Task::none()
            }
            Message::Submit => match self.session.submit() {
                Some(job) => {
                    let client = self.client.clone();
                    Task::perform(client.execute(job), |(token, outcome)| {
                        Message::EditFinished(token, outcome)
                    })
                }
                None => Task::none(),
            },
            Message::EditFinished(token, outcome) => {
                self.session.finish(token, outcome);
                Task::none()
            }
            Message::Reset => {
                self.session.reset();
                self.intake_pending = None;
                self.hovering = false;
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let reading = self.intake_pending.is_some();
        let main: Element<Message> = match Surface::from_session(&self.session, self.hovering, reading) {
            Surface::Intake { highlighted } => ui::uploader::view(highlighted),
            Surface::Editor(editor) => ui::editor::view(editor),
        };

        let content = column![
            ui::header::header(),
            container(main).width(Length::Fill).center_x(Length::Fill),
            ui::header::footer(),
        ]
        .spacing(32)
        .padding(32)
        .max_width(1200.0)
        .align_x(Alignment::Center);

        scrollable(container(content).width(Length::Fill).center_x(Length::Fill))
            .height(Length::Fill)
            .into()
    }

    /// Route file drag-and-drop window events into messages
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _id| match event {
            Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Show the invalid-file warning without touching the session
fn warn_user(error: IntakeError) -> Task<Message> {
    Task::perform(intake::show_warning(error.to_string()), |_| Message::WarningDismissed)
}

/// Install the tracing subscriber (RUST_LOG overrides the default level)
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Log a fatal startup error and exit; the app cannot work without its client
fn fatal(err: impl std::fmt::Display) -> ! {
    error!("❌ {}", err);
    eprintln!("Error: {}", err);
    std::process::exit(1);
}

fn main() -> iced::Result {
    init_logging();

    let config = Config::load().unwrap_or_else(|e| fatal(e));
    info!("Loaded configuration: {:?}", config);

    let client = GeminiClient::new(&config).unwrap_or_else(|e| fatal(e));

    iced::application("AI Image Editor", ImageEditor::update, ImageEditor::view)
        .subscription(ImageEditor::subscription)
        .theme(ImageEditor::theme)
        .window_size((1200.0, 860.0))
        .centered()
        .run_with(move || ImageEditor::new(client))
}
