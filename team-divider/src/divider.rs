use chrono::Local;
use thiserror::Error;
use crate::form::{validate_form, FormError, PlayerForm, Position};
use crate::history::{History, HistoryError, Storage, TeamRecord};
use crate::teams::{split_teams, CoinFlip, TeamPair};

#[derive(Error, Debug)]
pub enum DividerError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    History(#[from] HistoryError),
}

/// Everything one user sees: the name form, the latest split, and saved history
pub struct TeamDivider<S: Storage, C: CoinFlip> {
    form: PlayerForm,
    current: Option<TeamPair>,
    history: History<S>,
    coin: C,
    show_history: bool,
}

impl<S: Storage, C: CoinFlip> TeamDivider<S, C> {
    /// Starts with an empty form and whatever history `storage` holds
    pub fn new(storage: S, coin: C) -> Self {
        Self {
            form: PlayerForm::new(),
            current: None,
            history: History::load(storage),
            coin,
            show_history: false,
        }
    }

    pub fn form(&self) -> &PlayerForm {
        &self.form
    }

    pub fn current_teams(&self) -> Option<&TeamPair> {
        self.current.as_ref()
    }

    pub fn records(&self) -> &[TeamRecord] {
        self.history.records()
    }

    #[cfg(test)]
    pub fn history(&self) -> &History<S> {
        &self.history
    }

    pub fn show_history(&self) -> bool {
        self.show_history
    }

    pub fn set_player_name(
        &mut self,
        position: Position,
        slot: usize,
        value: impl Into<String>,
    ) -> Result<(), DividerError> {
        self.form.set_player_name(position, slot, value)?;
        Ok(())
    }

    /// Validates the form, splits the teams, and saves the result as the newest record.
    /// A rejected submission changes nothing.
    pub fn submit_assignment(&mut self) -> Result<&TeamRecord, DividerError> {
        let pairs = validate_form(&self.form)?;
        let teams = split_teams(&pairs, &mut self.coin);

        let record = self.history.append(teams, Local::now())?;
        self.current = Some(record.teams());
        Ok(record)
    }

    /// Empties the form and the displayed split. History is kept.
    pub fn reset_form(&mut self) {
        self.form.reset();
        self.current = None;
    }

    pub fn delete_record(&mut self, id: &str) -> Result<bool, DividerError> {
        Ok(self.history.delete(id)?)
    }

    pub fn clear_history(&mut self) -> Result<(), DividerError> {
        self.history.clear()?;
        Ok(())
    }

    pub fn toggle_history_visibility(&mut self) -> bool {
        self.show_history = !self.show_history;
        self.show_history
    }
}
