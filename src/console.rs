//! Line-oriented menus for users and administrators.
//!
//! The console reads from any [`BufRead`] and writes to any [`Write`], so
//! sessions can be scripted. End of input ends the session as if the user
//! had quit.

use std::io::{self, BufRead, Write};

use crate::display::{similar_listing, university_details, university_summary};
use crate::domain::account::{Account, AccountKind};
use crate::domain::sentinel::SENTINEL_TEXT;
use crate::domain::university::{University, UniversityField};
use crate::repository::{
    AccountReader, AccountWriter, RepositoryError, SavedSchoolReader, SavedSchoolWriter,
    UniversityReader, UniversityWriter,
};
use crate::services::ServiceError;
use crate::services::account::AccountService;
use crate::services::saved_school::SavedSchoolService;
use crate::services::search::SearchEngine;
use crate::services::university::UniversityService;

const QUIT: &str = "quit";
const ABORT: &str = "EXIT";
const STUDENT_COUNT_IGNORED: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Back,
    Exit,
}

enum Login {
    Success(Account),
    Failed,
    Quit,
}

pub struct Console<R, I, O> {
    accounts: AccountService<R>,
    universities: UniversityService<R>,
    saved: SavedSchoolService<R>,
    search: SearchEngine<R>,
    input: I,
    output: O,
}

impl<R, I, O> Console<R, I, O>
where
    R: Clone
        + UniversityReader
        + UniversityWriter
        + AccountReader
        + AccountWriter
        + SavedSchoolReader
        + SavedSchoolWriter,
    I: BufRead,
    O: Write,
{
    pub fn new(repo: R, input: I, output: O) -> Self {
        Self {
            accounts: AccountService::new(repo.clone()),
            universities: UniversityService::new(repo.clone()),
            saved: SavedSchoolService::new(repo.clone()),
            search: SearchEngine::new(repo),
            input,
            output,
        }
    }

    /// Runs login sessions until the user quits or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let account = match self.login()? {
                Login::Success(account) => account,
                Login::Failed => continue,
                Login::Quit => break,
            };

            let flow = if account.is_admin() {
                self.admin_menu(&account)?
            } else {
                self.user_menu(&account)?
            };

            if flow == Flow::Exit {
                break;
            }
            writeln!(self.output, "You have been logged out.")?;
        }

        writeln!(self.output, "\nExiting Choose My College. Goodbye!")?;
        self.output.flush()
    }

    fn login(&mut self) -> io::Result<Login> {
        self.header("Welcome to Choose My College (CMC)!")?;
        writeln!(
            self.output,
            "Please log in, or enter '{QUIT}' as username to exit."
        )?;

        let username = loop {
            let Some(line) = self.prompt("Username: ")? else {
                return Ok(Login::Quit);
            };
            let line = line.trim().to_string();
            if line.eq_ignore_ascii_case(QUIT) {
                return Ok(Login::Quit);
            }
            if !line.is_empty() {
                break line;
            }
        };
        let Some(password) = self.prompt("Password: ")? else {
            return Ok(Login::Quit);
        };

        match self.accounts.login(&username, &password) {
            Ok(Some(account)) => {
                writeln!(self.output, "Login successful!")?;
                Ok(Login::Success(account))
            }
            Ok(None) => {
                writeln!(
                    self.output,
                    "Login failed! Incorrect username or password, or account inactive."
                )?;
                writeln!(self.output, "Please try again.")?;
                Ok(Login::Failed)
            }
            Err(e) => {
                self.report(e)?;
                Ok(Login::Failed)
            }
        }
    }

    fn user_menu(&mut self, account: &Account) -> io::Result<Flow> {
        let username = account.username().to_string();

        loop {
            self.header("User Menu")?;
            let Some(choice) = self.menu_choice(&[
                "Search Universities",
                "View Saved Schools",
                "View Specific School",
                "Save a School",
                "Remove a Saved School",
                "Search Saved Schools",
                "Logout",
            ])?
            else {
                return Ok(Flow::Exit);
            };

            let flow = match choice {
                1 => self.search_universities()?,
                2 => self.view_saved_schools(&username)?,
                3 => self.view_specific_school()?,
                4 => self.save_school(&username)?,
                5 => self.remove_saved_school(&username)?,
                6 => self.search_saved_schools(&username)?,
                _ => Flow::Back,
            };

            if flow != Flow::Continue {
                return Ok(flow);
            }
        }
    }

    fn search_universities(&mut self) -> io::Result<Flow> {
        let Some(state) = self.prompt("State (leave blank to not search by this criterion): ")?
        else {
            return Ok(Flow::Exit);
        };
        let Some(count) = self.prompt("Student Number (leave blank or enter number): ")? else {
            return Ok(Flow::Exit);
        };

        let count = count.trim();
        let num_students = if count.is_empty() {
            STUDENT_COUNT_IGNORED
        } else {
            match count.parse::<i64>() {
                Ok(value) => value,
                Err(_) => {
                    writeln!(
                        self.output,
                        "Invalid number entered. Ignoring student number criterion."
                    )?;
                    STUDENT_COUNT_IGNORED
                }
            }
        };

        let results = match self.search.search(Some(state.trim()), num_students) {
            Ok(results) => results,
            Err(e) => {
                self.report(e.into())?;
                return Ok(Flow::Continue);
            }
        };

        self.header("Search Results")?;
        if results.is_empty() {
            writeln!(self.output, "No schools found matching your criteria.")?;
            return Ok(Flow::Continue);
        }
        for (index, university) in results.iter().enumerate() {
            writeln!(
                self.output,
                "{}. {}",
                index + 1,
                university_summary(university)
            )?;
        }

        let Some(selected) = self.pick_entry(results.len())? else {
            return Ok(Flow::Exit);
        };
        match selected {
            Some(index) => self.show_school(&results[index]),
            None => Ok(Flow::Continue),
        }
    }

    fn view_saved_schools(&mut self, username: &str) -> io::Result<Flow> {
        let saved = match self.saved.saved_schools(username) {
            Ok(saved) => saved,
            Err(e) => {
                self.report(e)?;
                return Ok(Flow::Continue);
            }
        };

        self.header("Saved Schools")?;
        if saved.is_empty() {
            writeln!(self.output, "You have no saved schools.")?;
            return Ok(Flow::Continue);
        }
        for (index, entry) in saved.iter().enumerate() {
            writeln!(
                self.output,
                "{}. {} (saved {})",
                index + 1,
                entry.school_name,
                entry.formatted_date()
            )?;
        }

        let Some(selected) = self.pick_entry(saved.len())? else {
            return Ok(Flow::Exit);
        };
        let Some(index) = selected else {
            return Ok(Flow::Continue);
        };

        let school_name = saved[index].school_name.clone();
        match self.universities.get_university(&school_name) {
            Ok(Some(university)) => self.show_school(&university),
            Ok(None) => {
                writeln!(
                    self.output,
                    "Could not retrieve details for saved school: {school_name}"
                )?;
                Ok(Flow::Continue)
            }
            Err(e) => {
                self.report(e)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn view_specific_school(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("Enter the school name to view: ")? else {
            return Ok(Flow::Exit);
        };
        let name = name.trim().to_uppercase();
        if name.is_empty() {
            writeln!(self.output, "No school name entered.")?;
            return Ok(Flow::Continue);
        }

        match self.universities.get_university(&name) {
            Ok(Some(university)) => self.show_school(&university),
            Ok(None) => {
                writeln!(self.output, "Could not find details for university: {name}")?;
                Ok(Flow::Continue)
            }
            Err(e) => {
                self.report(e)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn show_school(&mut self, university: &University) -> io::Result<Flow> {
        self.header(&format!("{} Details", university.name()))?;
        writeln!(self.output, "{}", university_details(university))?;

        let question = format!("Find schools similar to {}? (Y/N): ", university.name());
        let Some(answer) = self.prompt(&question)? else {
            return Ok(Flow::Exit);
        };
        if !answer.trim().eq_ignore_ascii_case("y") {
            return Ok(Flow::Continue);
        }

        match self.search.find_similar(Some(university)) {
            Ok(similar) if similar.is_empty() => {
                writeln!(
                    self.output,
                    "No similar schools found based on the defined criteria."
                )?;
            }
            Ok(similar) => {
                self.header("Similar Schools Found")?;
                write!(self.output, "{}", similar_listing(&similar))?;
            }
            Err(e) => self.report(e.into())?,
        }
        Ok(Flow::Continue)
    }

    fn save_school(&mut self, username: &str) -> io::Result<Flow> {
        let Some(name) = self.prompt("Enter the name of the school to save: ")? else {
            return Ok(Flow::Exit);
        };
        let name = name.trim().to_uppercase();

        match self.saved.save_school(username, &name) {
            Ok(true) => writeln!(self.output, "{name} saved.")?,
            Ok(false) => writeln!(self.output, "{name} is already on your saved list.")?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn remove_saved_school(&mut self, username: &str) -> io::Result<Flow> {
        let Some(name) = self.prompt("Enter the name of the saved school to remove: ")? else {
            return Ok(Flow::Exit);
        };
        let name = name.trim().to_uppercase();

        match self.saved.remove_saved_school(username, &name) {
            Ok(true) => writeln!(self.output, "Removed {name} from your saved schools.")?,
            Ok(false) => writeln!(self.output, "{name} is not on your saved list.")?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn search_saved_schools(&mut self, username: &str) -> io::Result<Flow> {
        let Some(criteria) = self.prompt("Search saved schools (name, state or location): ")?
        else {
            return Ok(Flow::Exit);
        };

        match self.saved.search_saved(username, &criteria) {
            Ok(found) if found.is_empty() => {
                writeln!(self.output, "No saved schools match '{}'.", criteria.trim())?;
            }
            Ok(found) => {
                for (index, entry) in found.iter().enumerate() {
                    writeln!(self.output, "{}. {}", index + 1, entry.school_name)?;
                }
            }
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn admin_menu(&mut self, account: &Account) -> io::Result<Flow> {
        loop {
            self.header("Admin Menu")?;
            let Some(choice) =
                self.menu_choice(&["Manage Users", "Manage Universities", "Logout"])?
            else {
                return Ok(Flow::Exit);
            };

            let flow = match choice {
                1 => self.user_management(account)?,
                2 => self.university_management()?,
                _ => return Ok(Flow::Back),
            };

            if flow == Flow::Exit {
                return Ok(flow);
            }
        }
    }

    fn user_management(&mut self, admin: &Account) -> io::Result<Flow> {
        loop {
            self.header("Manage Users")?;
            let Some(choice) = self.menu_choice(&[
                "List Users",
                "Add User",
                "Edit User",
                "Deactivate User",
                "Reactivate User",
                "Remove User",
                "Go Back",
            ])?
            else {
                return Ok(Flow::Exit);
            };

            let flow = match choice {
                1 => self.list_users()?,
                2 => self.add_user()?,
                3 => self.edit_user()?,
                4 => self.deactivate_user(admin)?,
                5 => self.reactivate_user()?,
                6 => self.remove_user(admin)?,
                _ => return Ok(Flow::Continue),
            };

            if flow == Flow::Exit {
                return Ok(flow);
            }
        }
    }

    fn list_users(&mut self) -> io::Result<Flow> {
        let accounts = match self.accounts.list_accounts() {
            Ok(accounts) => accounts,
            Err(e) => {
                self.report(e)?;
                return Ok(Flow::Continue);
            }
        };
        let counts = match self.saved.saved_counts() {
            Ok(counts) => counts,
            Err(e) => {
                self.report(e)?;
                return Ok(Flow::Continue);
            }
        };

        if accounts.is_empty() {
            writeln!(self.output, "No users found.")?;
        }
        for (index, account) in accounts.iter().enumerate() {
            let saved = counts.get(account.username()).copied().unwrap_or_default();
            writeln!(self.output, "{}. {} - {} saved", index + 1, account, saved)?;
        }
        Ok(Flow::Continue)
    }

    fn add_user(&mut self) -> io::Result<Flow> {
        let mut answers = Vec::with_capacity(4);
        for question in ["Username: ", "Password: ", "First Name: ", "Last Name: "] {
            let Some(answer) = self.prompt(question)? else {
                return Ok(Flow::Exit);
            };
            answers.push(answer.trim().to_string());
        }
        let Some(admin) = self.prompt("Administrator? (Y/N): ")? else {
            return Ok(Flow::Exit);
        };
        let kind = if admin.trim().eq_ignore_ascii_case("y") {
            AccountKind::Admin
        } else {
            AccountKind::User
        };

        let account = match Account::new(&answers[0], &answers[1], &answers[2], &answers[3], kind)
        {
            Ok(account) => account,
            Err(e) => {
                self.report(e.into())?;
                return Ok(Flow::Continue);
            }
        };

        match self.accounts.add_account(&account) {
            Ok(()) => writeln!(self.output, "Added user {}.", account.username())?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn edit_user(&mut self) -> io::Result<Flow> {
        let Some(username) = self.prompt("Username to edit: ")? else {
            return Ok(Flow::Exit);
        };
        let mut account = match self.accounts.account(username.trim()) {
            Ok(Some(account)) => account,
            Ok(None) => {
                writeln!(self.output, "{} not found.", username.trim())?;
                return Ok(Flow::Continue);
            }
            Err(e) => {
                self.report(e)?;
                return Ok(Flow::Continue);
            }
        };

        writeln!(self.output, "Press Enter to keep the current value.")?;
        let Some(password) = self.prompt("Password: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(first_name) = self.prompt(&format!("First Name ({}): ", account.first_name))?
        else {
            return Ok(Flow::Exit);
        };
        let Some(last_name) = self.prompt(&format!("Last Name ({}): ", account.last_name))? else {
            return Ok(Flow::Exit);
        };

        for (field, answer) in [
            (&mut account.password, password),
            (&mut account.first_name, first_name),
            (&mut account.last_name, last_name),
        ] {
            let answer = answer.trim();
            if !answer.is_empty() {
                *field = answer.to_string();
            }
        }

        match self.accounts.edit_account(&account) {
            Ok(()) => writeln!(self.output, "Updated user {}.", account.username())?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn deactivate_user(&mut self, admin: &Account) -> io::Result<Flow> {
        let Some(username) = self.prompt("Username to deactivate: ")? else {
            return Ok(Flow::Exit);
        };
        let username = username.trim();
        if username == admin.username() {
            writeln!(self.output, "You cannot deactivate your own account.")?;
            return Ok(Flow::Continue);
        }

        match self.accounts.deactivate_account(username) {
            Ok(()) => writeln!(self.output, "Deactivated {username}.")?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn reactivate_user(&mut self) -> io::Result<Flow> {
        let Some(username) = self.prompt("Username to reactivate: ")? else {
            return Ok(Flow::Exit);
        };
        let username = username.trim();

        match self.accounts.reactivate_account(username) {
            Ok(()) => writeln!(self.output, "Reactivated {username}.")?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn remove_user(&mut self, admin: &Account) -> io::Result<Flow> {
        let Some(username) = self.prompt("Username to remove: ")? else {
            return Ok(Flow::Exit);
        };
        let username = username.trim();
        if username == admin.username() {
            writeln!(self.output, "You cannot remove your own account.")?;
            return Ok(Flow::Continue);
        }

        match self.accounts.remove_account(username) {
            Ok(()) => writeln!(self.output, "Removed {username}.")?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn university_management(&mut self) -> io::Result<Flow> {
        loop {
            self.header("Manage Universities")?;
            let Some(choice) = self.menu_choice(&[
                "List Universities",
                "Add University",
                "Edit University",
                "Remove University",
                "Add Emphasis",
                "Remove Emphasis",
                "Go Back",
            ])?
            else {
                return Ok(Flow::Exit);
            };

            let flow = match choice {
                1 => self.list_universities()?,
                2 => self.add_university()?,
                3 => self.edit_university()?,
                4 => self.remove_university()?,
                5 => self.add_emphasis()?,
                6 => self.remove_emphasis()?,
                _ => return Ok(Flow::Continue),
            };

            if flow == Flow::Exit {
                return Ok(flow);
            }
        }
    }

    fn list_universities(&mut self) -> io::Result<Flow> {
        match self.universities.list_universities() {
            Ok(universities) if universities.is_empty() => {
                writeln!(self.output, "No universities found in the system.")?;
            }
            Ok(universities) => {
                for (index, university) in universities.iter().enumerate() {
                    writeln!(
                        self.output,
                        "{}. {}",
                        index + 1,
                        university_summary(university)
                    )?;
                }
            }
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn add_university(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("Name: ")? else {
            return Ok(Flow::Exit);
        };
        let mut university = match University::new(&name.trim().to_uppercase()) {
            Ok(university) => university,
            Err(e) => {
                self.report(e.into())?;
                return Ok(Flow::Continue);
            }
        };

        writeln!(
            self.output,
            "Enter each value, press Enter to leave it unknown, or '{ABORT}' to abort."
        )?;
        match self.prompt_fields(&mut university)? {
            Flow::Continue => {}
            other => return Ok(other),
        }

        match self.universities.add_university(&university) {
            Ok(()) => writeln!(self.output, "Added {}.", university.name())?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn edit_university(&mut self) -> io::Result<Flow> {
        let Some(university) = self.find_university("Name of the university to edit: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(mut university) = university else {
            return Ok(Flow::Continue);
        };

        writeln!(
            self.output,
            "Press Enter to keep the current value, '{SENTINEL_TEXT}' to clear it, or '{ABORT}' to abort."
        )?;
        match self.prompt_fields(&mut university)? {
            Flow::Continue => {}
            other => return Ok(other),
        }

        match self.universities.edit_university(&university) {
            Ok(()) => writeln!(self.output, "Updated {}.", university.name())?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    /// Prompts for every editable field. Blank input keeps the current value.
    /// Returns [`Flow::Back`] when the user aborts.
    fn prompt_fields(&mut self, university: &mut University) -> io::Result<Flow> {
        for field in UniversityField::ALL {
            loop {
                let current = university
                    .field_value(field)
                    .unwrap_or_else(|| SENTINEL_TEXT.to_string());
                let Some(answer) = self.prompt(&format!("{} ({current}): ", field.label()))?
                else {
                    return Ok(Flow::Exit);
                };
                let answer = answer.trim();
                if answer.eq_ignore_ascii_case(ABORT) {
                    writeln!(self.output, "Aborted.")?;
                    return Ok(Flow::Back);
                }
                if answer.is_empty() {
                    break;
                }

                let answer = if field.is_link() {
                    answer.to_string()
                } else {
                    answer.to_uppercase()
                };
                match university.set_field(field, &answer) {
                    Ok(()) => break,
                    Err(e) => writeln!(self.output, "{e}")?,
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn remove_university(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("Name of the university to remove: ")? else {
            return Ok(Flow::Exit);
        };
        let name = name.trim().to_uppercase();

        match self.universities.remove_university(&name) {
            Ok(()) => writeln!(self.output, "Removed {name}.")?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn add_emphasis(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("University name: ")? else {
            return Ok(Flow::Exit);
        };
        match self.universities.list_emphases() {
            Ok(known) if !known.is_empty() => {
                writeln!(self.output, "Known emphases: {}", known.join(", "))?;
            }
            Ok(_) => {}
            Err(e) => log::warn!("Could not list emphases: {e}"),
        }
        let Some(emphasis) = self.prompt("Emphasis to add: ")? else {
            return Ok(Flow::Exit);
        };
        let name = name.trim().to_uppercase();
        let emphasis = emphasis.trim().to_uppercase();
        if emphasis.is_empty() {
            writeln!(self.output, "No emphasis entered.")?;
            return Ok(Flow::Continue);
        }

        match self.universities.add_emphasis(&name, &emphasis) {
            Ok(()) => writeln!(self.output, "Added {emphasis} to {name}.")?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn remove_emphasis(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("University name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(emphasis) = self.prompt("Emphasis to remove: ")? else {
            return Ok(Flow::Exit);
        };
        let name = name.trim().to_uppercase();
        let emphasis = emphasis.trim().to_uppercase();

        match self.universities.remove_emphasis(&name, &emphasis) {
            Ok(true) => writeln!(self.output, "Removed {emphasis} from {name}.")?,
            Ok(false) => writeln!(self.output, "{name} has no emphasis {emphasis}.")?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    /// Outer `None` means input ended; inner `None` means no such university.
    fn find_university(&mut self, question: &str) -> io::Result<Option<Option<University>>> {
        let Some(name) = self.prompt(question)? else {
            return Ok(None);
        };
        let name = name.trim().to_uppercase();

        match self.universities.get_university(&name) {
            Ok(Some(university)) => Ok(Some(Some(university))),
            Ok(None) => {
                writeln!(self.output, "{name} not found.")?;
                Ok(Some(None))
            }
            Err(e) => {
                self.report(e)?;
                Ok(Some(None))
            }
        }
    }

    fn header(&mut self, title: &str) -> io::Result<()> {
        let dashes = "-".repeat(title.chars().count());
        writeln!(self.output, "\n{dashes}\n{title}\n{dashes}")
    }

    /// Writes `question` and reads one line. `None` at end of input. Lines
    /// that are not UTF-8 are rejected and the question is asked again.
    fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        loop {
            write!(self.output, "{question}")?;
            self.output.flush()?;

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    let trimmed = line.trim_end_matches(['\n', '\r']).len();
                    line.truncate(trimmed);
                    return Ok(Some(line));
                }
                // read_line has already consumed the offending line.
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    log::warn!("Discarded unreadable input: {e}");
                    writeln!(self.output, "Input must be valid UTF-8 text. Please try again.")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Shows numbered options and asks until a valid one is picked.
    fn menu_choice(&mut self, options: &[&str]) -> io::Result<Option<usize>> {
        for (index, option) in options.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, option)?;
        }

        loop {
            let Some(answer) = self.prompt("Choose an option: ")? else {
                return Ok(None);
            };
            match answer.trim().parse::<usize>() {
                Ok(choice) if (1..=options.len()).contains(&choice) => return Ok(Some(choice)),
                _ => writeln!(self.output, "Pick a number 1-{}!", options.len())?,
            }
        }
    }

    /// Asks for an entry of a numbered listing. Blank input goes back.
    /// Returns a zero-based index.
    fn pick_entry(&mut self, len: usize) -> io::Result<Option<Option<usize>>> {
        loop {
            let Some(answer) =
                self.prompt("Enter a number to view details, or press Enter to go back: ")?
            else {
                return Ok(None);
            };
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(Some(None));
            }
            match answer.parse::<usize>() {
                Ok(choice) if (1..=len).contains(&choice) => return Ok(Some(Some(choice - 1))),
                _ => writeln!(self.output, "Pick a number 1-{len}!")?,
            }
        }
    }

    fn report(&mut self, err: ServiceError) -> io::Result<()> {
        match err {
            ServiceError::Domain(e) => writeln!(self.output, "{e}"),
            ServiceError::NotFound(what) => writeln!(self.output, "{what} not found."),
            ServiceError::Repository(RepositoryError::Conflict(message)) => {
                log::warn!("Conflict: {message}");
                writeln!(self.output, "That record already exists.")
            }
            ServiceError::Repository(e) => {
                log::error!("Storage failure: {e}");
                writeln!(self.output, "Operation failed")
            }
        }
    }
}
