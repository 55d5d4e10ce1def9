use anyhow::Result;
use derive_more::Display;
use formguard::consts::{LOG_FILE, LOG_LEVEL};
use formguard::models::CheckOutcome;
use formguard::services::{RegistrationForm, SubmitError};
use inquire::{Password, PasswordDisplayMode, Select, Text};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// A text menu
trait Menu {
    /// One round of the menu. Returns None to stop, Some(()) to go again.
    fn enter(&mut self) -> Result<MenuExit>;

    /// Runs the menu until it asks to stop, reporting errors on the way
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                eprintln!("Error: {error}");
            }
        }
    }
}

pub struct App {
    form: RegistrationForm,
}

impl App {
    pub fn new(form: RegistrationForm) -> Self {
        App { form }
    }

    pub fn start(&mut self) -> Result<()> {
        println!("Registration form ({})", self.form.name());
        self.enter_loop();
        Ok(())
    }
}

fn prompt_password(message: &str) -> Result<String> {
    Ok(Password::new(message)
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()?)
}

impl Menu for App {
    fn enter(&mut self) -> Result<MenuExit> {
        #[derive(EnumIter, Display)]
        enum Choice {
            #[display("Enter email")]
            Email,
            #[display("Enter password")]
            Password,
            #[display("Confirm password")]
            ConfirmPassword,
            #[display("Submit")]
            Submit,
            #[display("Show form state")]
            Show,
            #[display("Reset")]
            Reset,
            #[display("Quit")]
            Exit,
        }

        let choice = Select::new("What do you want to do?", Choice::iter().collect()).prompt()?;

        match choice {
            Choice::Email => {
                let value = Text::new("Email:").prompt()?;
                if let CheckOutcome::Invalid { message } = self.form.input_email(&value) {
                    println!("[!] {message}");
                }
            }
            Choice::Password => {
                let value = prompt_password("Password:")?;
                self.form.set_password(&value);
            }
            Choice::ConfirmPassword => {
                let value = prompt_password("Confirm password:")?;
                self.form.set_confirm_password(&value);
            }
            Choice::Submit => match self.form.submit() {
                Ok(registration) => println!("[*] Registered {registration}"),
                Err(SubmitError::InvalidControl { name, message }) => {
                    println!("[!] {name}: {message}")
                }
                Err(SubmitError::Prevented { message }) => println!("[!] {message}"),
            },
            Choice::Show => {
                println!("{}", serde_json::to_string_pretty(&self.form.snapshot())?);
            }
            Choice::Reset => self.form.reset(),
            Choice::Exit => return Ok(MENU_EXIT),
        }
        Ok(MENU_LOOP)
    }
}

fn main() -> anyhow::Result<()> {
    simple_logging::log_to_file(LOG_FILE, LOG_LEVEL)?;

    App::new(RegistrationForm::new()).start()
}
