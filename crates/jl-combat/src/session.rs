//! The combat state machine.
//!
//! A session owns only value data: the defender, a snapshot of its cell, the
//! selection and the dice. Every transition borrows the [`GameState`] for the
//! length of the call, so nothing is held across the two points where the
//! session waits on its caller (value-card selection and the dice roll).
//!
//! ```text
//! Setup ─┬─> AutoWinResolved ─> Finalized ─> ResultsShown ─> Closed
//!        ├─> Rolling ─────────> Finalized
//!        │      └─> Aborted
//!        └─> Cancelled
//! ```

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use jl_core::{Card, Cell, CellState, GameState, Position};

use crate::dice::{DIE_FACES, DiceRoller, RollResults};
use crate::effects::{self, Engagement};
use crate::error::{CombatError, CombatResult};
use crate::id::CombatId;
use crate::journal::{CombatRecord, CombatResolution};
use crate::notice::{CombatNotice, NoticeKind};
use crate::outcome::CombatOutcome;
use crate::params::{CombatParameters, calculate_parameters};
use crate::resolution::evaluate;
use crate::select::{EligibleCard, eligible_value_cards};

/// Where a combat session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatPhase {
    /// Waiting for the player to pick a value card (or none).
    Setup,
    /// The attacker was stronger; no dice are rolled.
    AutoWinResolved,
    /// Waiting for the difference dice and the danger die.
    Rolling,
    /// The result is decided and its effects applied.
    Finalized,
    /// Waiting for the player to acknowledge the results.
    ResultsShown,
    /// Results acknowledged.
    Closed,
    /// Cancelled during setup. Nothing changed.
    Cancelled,
    /// The roll did not complete. Nothing changed.
    Aborted,
}

impl CombatPhase {
    /// Returns true once the session can no longer change.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Closed | Self::Cancelled | Self::Aborted)
    }
}

impl fmt::Display for CombatPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Setup => write!(f, "setup"),
            Self::AutoWinResolved => write!(f, "automatic win"),
            Self::Rolling => write!(f, "rolling"),
            Self::Finalized => write!(f, "finalized"),
            Self::ResultsShown => write!(f, "results"),
            Self::Closed => write!(f, "closed"),
            Self::Cancelled => write!(f, "cancelled"),
            Self::Aborted => write!(f, "aborted"),
        }
    }
}

/// One combat against a face-up card on the board.
#[derive(Debug, Clone)]
pub struct CombatSession {
    id: CombatId,
    phase: CombatPhase,
    trail: Vec<CombatPhase>,
    target: Position,
    defender: Card,
    prior: Cell,
    choices: Vec<EligibleCard>,
    selected: Option<Card>,
    parameters: Option<CombatParameters>,
    rolls: Option<RollResults>,
    outcome: Option<CombatOutcome>,
    record: Option<CombatRecord>,
    notices: Vec<CombatNotice>,
}

impl CombatSession {
    /// Start a combat against the face-up card at `target`.
    ///
    /// Emits a [`NoticeKind::ChooseValueCard`] listing the spendable hand
    /// cards. The game state is not modified.
    pub fn initiate(state: &GameState, target: Position) -> CombatResult<Self> {
        let prior = *state.board.cell(target)?;
        let defender = prior.card.ok_or(CombatError::DefenderAbsent(target))?;
        if prior.state != CellState::FaceUp {
            return Err(CombatError::NotActionable {
                position: target,
                state: prior.state,
            });
        }

        let id = CombatId::new();
        let choices = eligible_value_cards(&state.hand, state.player.suit());
        log::info!(
            "combat {id}: {defender} at {target}, {} value cards to choose from",
            choices.len()
        );

        let mut session = Self {
            id,
            phase: CombatPhase::Setup,
            trail: vec![CombatPhase::Setup],
            target,
            defender,
            prior,
            choices: choices.clone(),
            selected: None,
            parameters: None,
            rolls: None,
            outcome: None,
            record: None,
            notices: Vec::new(),
        };
        session.notify(NoticeKind::ChooseValueCard { defender, choices });
        Ok(session)
    }

    /// The session's ID.
    pub fn id(&self) -> CombatId {
        self.id
    }

    /// The current phase.
    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    /// Every phase entered so far, in order.
    pub fn trail(&self) -> &[CombatPhase] {
        &self.trail
    }

    /// Where the defender sits.
    pub fn target(&self) -> Position {
        self.target
    }

    /// The card being fought.
    pub fn defender(&self) -> Card {
        self.defender
    }

    /// The value cards offered at setup.
    pub fn choices(&self) -> &[EligibleCard] {
        &self.choices
    }

    /// The value card chosen, once a selection is confirmed.
    pub fn selected(&self) -> Option<Card> {
        self.selected
    }

    /// The combat parameters, once a selection is confirmed.
    pub fn parameters(&self) -> Option<CombatParameters> {
        self.parameters
    }

    /// The dice, once rolled.
    pub fn rolls(&self) -> Option<&RollResults> {
        self.rolls.as_ref()
    }

    /// The outcome, once finalized.
    pub fn outcome(&self) -> Option<&CombatOutcome> {
        self.outcome.as_ref()
    }

    /// The journal record, once the session has ended.
    pub fn record(&self) -> Option<&CombatRecord> {
        self.record.as_ref()
    }

    /// Drain the notices emitted since the last call.
    pub fn take_notices(&mut self) -> Vec<CombatNotice> {
        std::mem::take(&mut self.notices)
    }

    /// Confirm the value card to spend, or `None` to fight bare-handed.
    ///
    /// A stronger attacker wins outright: effects are applied immediately and
    /// the session moves to [`CombatPhase::ResultsShown`]. Otherwise it moves
    /// to [`CombatPhase::Rolling`] and waits for dice. Returns the new phase.
    pub fn confirm_selection(
        &mut self,
        state: &mut GameState,
        choice: Option<Card>,
    ) -> CombatResult<CombatPhase> {
        self.expect_phase(CombatPhase::Setup, "confirm a selection")?;
        if let Some(card) = choice {
            if !self.choices.iter().any(|e| e.card == card) {
                return Err(CombatError::InvalidSelection(card));
            }
        }
        if !self.target_is_current(state) {
            log::warn!("combat {}: {} moved before setup finished", self.id, self.defender);
            self.notify(NoticeKind::Cancelled);
            self.finish(CombatPhase::Cancelled, CombatResolution::Cancelled);
            return Err(CombatError::StaleTarget(self.target));
        }

        let parameters = calculate_parameters(choice.as_ref(), &self.defender);
        log::debug!("combat {}: {parameters}", self.id);

        if parameters.is_automatic_win() {
            self.finalize(state, choice, parameters, None, true)?;
        } else {
            self.selected = choice;
            self.parameters = Some(parameters);
            self.enter(CombatPhase::Rolling);
            self.notify(NoticeKind::RollRequired { parameters });
        }
        Ok(self.phase)
    }

    /// Cancel during setup. The target cell is restored and nothing else changes.
    ///
    /// If the target no longer holds the defender it is left untouched.
    pub fn cancel_setup(&mut self, state: &mut GameState) -> CombatResult<CombatRecord> {
        self.expect_phase(CombatPhase::Setup, "cancel")?;
        self.rollback(state)?;
        log::info!("combat {}: cancelled", self.id);
        self.notify(NoticeKind::Cancelled);
        Ok(self.finish(CombatPhase::Cancelled, CombatResolution::Cancelled))
    }

    /// Supply the rolled dice and finalize.
    ///
    /// The difference dice must number exactly as the parameters ask and
    /// every value must be a d6 face. If the target no longer holds the
    /// defender the session is aborted without touching the state.
    pub fn supply_roll_results(
        &mut self,
        state: &mut GameState,
        rolls: RollResults,
    ) -> CombatResult<CombatPhase> {
        self.expect_phase(CombatPhase::Rolling, "supply roll results")?;
        let parameters = self.parameters.ok_or(CombatError::InvalidTransition {
            operation: "supply roll results",
            phase: self.phase,
        })?;

        if rolls.difference.len() != parameters.difference_dice {
            return Err(CombatError::InvalidRoll(format!(
                "expected {} difference dice, got {}",
                parameters.difference_dice,
                rolls.difference.len()
            )));
        }
        if let Some(v) = rolls
            .difference
            .iter()
            .chain(rolls.danger.iter())
            .find(|v| !(1..=DIE_FACES).contains(*v))
        {
            return Err(CombatError::InvalidRoll(format!(
                "die value {v} is outside 1-{DIE_FACES}"
            )));
        }

        if !self.target_is_current(state) {
            log::warn!("combat {}: {} moved while rolling", self.id, self.defender);
            self.notify(NoticeKind::Aborted);
            self.finish(CombatPhase::Aborted, CombatResolution::Aborted);
            return Err(CombatError::StaleTarget(self.target));
        }

        let won = evaluate(&rolls.difference, rolls.danger, parameters.difference_dice);
        log::info!(
            "combat {}: rolled {rolls}, {}",
            self.id,
            if won { "won" } else { "lost" }
        );
        let spent = self.selected;
        self.finalize(state, spent, parameters, Some(rolls), won)?;
        Ok(self.phase)
    }

    /// Roll both dice steps with `dice` and finalize.
    ///
    /// If the roller cannot produce every value the session is aborted and
    /// the target restored, exactly as [`Self::report_roll_aborted`] does.
    pub fn roll<D: DiceRoller + ?Sized>(
        &mut self,
        state: &mut GameState,
        dice: &mut D,
    ) -> CombatResult<CombatPhase> {
        self.expect_phase(CombatPhase::Rolling, "roll")?;
        let count = self.parameters.map_or(0, |p| p.difference_dice);
        let difference = dice.roll_dice(count);
        let danger = dice.roll_die();
        match (difference, danger) {
            (Some(difference), Some(danger)) => {
                self.supply_roll_results(state, RollResults::new(difference, danger))
            }
            _ => {
                self.report_roll_aborted(state)?;
                Ok(self.phase)
            }
        }
    }

    /// The roll could not complete. The target cell is restored and nothing
    /// else changes. If the target no longer holds the defender it is left
    /// untouched.
    pub fn report_roll_aborted(&mut self, state: &mut GameState) -> CombatResult<CombatRecord> {
        self.expect_phase(CombatPhase::Rolling, "abort the roll")?;
        self.rollback(state)?;
        log::warn!("combat {}: roll aborted", self.id);
        self.notify(NoticeKind::Aborted);
        Ok(self.finish(CombatPhase::Aborted, CombatResolution::Aborted))
    }

    /// Close the results and end the session.
    pub fn acknowledge_results(&mut self) -> CombatResult<CombatRecord> {
        self.expect_phase(CombatPhase::ResultsShown, "acknowledge results")?;
        let resolution = match &self.outcome {
            Some(o) if o.won => CombatResolution::Won {
                automatic: o.automatic_win,
            },
            _ => CombatResolution::Lost,
        };
        Ok(self.finish(CombatPhase::Closed, resolution))
    }

    fn finalize(
        &mut self,
        state: &mut GameState,
        spent: Option<Card>,
        parameters: CombatParameters,
        rolls: Option<RollResults>,
        won: bool,
    ) -> CombatResult<()> {
        let automatic_win = rolls.is_none();
        let engagement = Engagement {
            target: self.target,
            defender: self.defender,
            spent,
        };
        let consequences = effects::apply(state, &engagement, won)?;

        self.selected = spent;
        self.parameters = Some(parameters);
        self.rolls = rolls.clone();
        if automatic_win {
            self.enter(CombatPhase::AutoWinResolved);
            self.notify(NoticeKind::AutoWin { parameters });
        }
        self.enter(CombatPhase::Finalized);

        let outcome = CombatOutcome {
            won,
            automatic_win,
            attacker: spent,
            defender: self.defender,
            target: self.target,
            parameters,
            rolls,
            consequences,
        };
        for line in &outcome.consequences {
            log::debug!("combat {}: {line}", self.id);
        }
        self.outcome = Some(outcome.clone());
        self.notify(NoticeKind::Results { outcome });
        self.enter(CombatPhase::ResultsShown);
        Ok(())
    }

    fn rollback(&self, state: &mut GameState) -> CombatResult<()> {
        if !self.target_is_current(state) {
            log::warn!(
                "combat {}: {} moved, leaving {} as it is",
                self.id,
                self.defender,
                self.target
            );
            return Ok(());
        }
        state.board.set_cell(self.target, self.prior)?;
        Ok(())
    }

    fn target_is_current(&self, state: &GameState) -> bool {
        state
            .board
            .cell(self.target)
            .is_ok_and(|cell| *cell == self.prior)
    }

    fn finish(&mut self, phase: CombatPhase, resolution: CombatResolution) -> CombatRecord {
        self.enter(phase);
        let record = CombatRecord {
            combat: self.id,
            defender: self.defender,
            position: self.target,
            spent: self.selected,
            resolution,
            timestamp: Utc::now(),
        };
        self.record = Some(record.clone());
        record
    }

    fn expect_phase(&self, phase: CombatPhase, operation: &'static str) -> CombatResult<()> {
        if self.phase != phase {
            return Err(CombatError::InvalidTransition {
                operation,
                phase: self.phase,
            });
        }
        Ok(())
    }

    fn enter(&mut self, phase: CombatPhase) {
        log::debug!("combat {}: {} -> {phase}", self.id, self.phase);
        self.phase = phase;
        self.trail.push(phase);
    }

    fn notify(&mut self, kind: NoticeKind) {
        self.notices.push(CombatNotice {
            combat: self.id,
            kind,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;
    use jl_core::{Board, Hand, Player, Suit};

    const TARGET: Position = Position { row: 2, col: 3 };

    fn card(code: &str) -> Card {
        code.parse().unwrap()
    }

    fn state(defender: &str, hand: &[&str]) -> GameState {
        let mut board = Board::new();
        board.place(TARGET, card(defender), CellState::FaceUp).unwrap();
        let hand = Hand::from_cards(hand.iter().map(|c| card(c))).unwrap();
        GameState::new(board, hand, Player::new(Suit::Spades))
    }

    #[test]
    fn initiate_offers_choices() {
        let s = state("9C", &["7D", "9S", "KS"]);
        let mut session = CombatSession::initiate(&s, TARGET).unwrap();
        assert_eq!(session.phase(), CombatPhase::Setup);
        assert_eq!(session.defender(), card("9C"));

        let notices = session.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].combat, session.id());
        match &notices[0].kind {
            NoticeKind::ChooseValueCard { choices, .. } => {
                let cards: Vec<Card> = choices.iter().map(|e| e.card).collect();
                assert_eq!(cards, vec![card("7D"), card("KS")]);
            }
            other => panic!("unexpected notice {other:?}"),
        }
        assert!(session.take_notices().is_empty());
    }

    #[test]
    fn initiate_rejects_bad_targets() {
        let mut s = state("9C", &[]);
        assert_eq!(
            CombatSession::initiate(&s, Position::new(0, 0)).unwrap_err(),
            CombatError::DefenderAbsent(Position::new(0, 0))
        );
        assert!(matches!(
            CombatSession::initiate(&s, Position::new(9, 0)),
            Err(CombatError::Core(_))
        ));
        s.board.set_state(TARGET, CellState::FaceDown).unwrap();
        assert_eq!(
            CombatSession::initiate(&s, TARGET).unwrap_err(),
            CombatError::NotActionable {
                position: TARGET,
                state: CellState::FaceDown
            }
        );
    }

    #[test]
    fn ineligible_selection_is_rejected() {
        let mut s = state("9C", &["7D", "9S"]);
        let mut session = CombatSession::initiate(&s, TARGET).unwrap();
        assert_eq!(
            session.confirm_selection(&mut s, Some(card("9S"))),
            Err(CombatError::InvalidSelection(card("9S")))
        );
        assert_eq!(session.phase(), CombatPhase::Setup);
    }

    #[test]
    fn wrong_phase_is_rejected() {
        let mut s = state("9C", &[]);
        let mut session = CombatSession::initiate(&s, TARGET).unwrap();
        assert!(matches!(
            session.supply_roll_results(&mut s, RollResults::new(vec![1, 2], 3)),
            Err(CombatError::InvalidTransition {
                phase: CombatPhase::Setup,
                ..
            })
        ));
        assert!(session.acknowledge_results().is_err());
        session.confirm_selection(&mut s, None).unwrap();
        assert!(session.cancel_setup(&mut s).is_err());
        assert!(session.confirm_selection(&mut s, None).is_err());
    }

    #[test]
    fn roll_count_and_range_are_checked() {
        let mut s = state("9C", &["7D"]);
        let mut session = CombatSession::initiate(&s, TARGET).unwrap();
        session.confirm_selection(&mut s, Some(card("7D"))).unwrap();
        let before = s.clone();

        let err = session
            .supply_roll_results(&mut s, RollResults::new(vec![1, 2], 3))
            .unwrap_err();
        assert_eq!(
            err,
            CombatError::InvalidRoll("expected 3 difference dice, got 2".to_string())
        );
        assert!(matches!(
            session.supply_roll_results(&mut s, RollResults::new(vec![1, 2, 7], 3)),
            Err(CombatError::InvalidRoll(_))
        ));
        assert!(matches!(
            session.supply_roll_results(&mut s, RollResults::new(vec![1, 2, 3], 0)),
            Err(CombatError::InvalidRoll(_))
        ));
        assert_eq!(session.phase(), CombatPhase::Rolling);
        assert_eq!(s, before);
    }

    #[test]
    fn stale_target_aborts_without_changes() {
        let mut s = state("9C", &["7D"]);
        let mut session = CombatSession::initiate(&s, TARGET).unwrap();
        session.confirm_selection(&mut s, Some(card("7D"))).unwrap();
        s.board.take(TARGET).unwrap();
        let before = s.clone();

        assert_eq!(
            session.supply_roll_results(&mut s, RollResults::new(vec![1, 2, 3], 4)),
            Err(CombatError::StaleTarget(TARGET))
        );
        assert_eq!(session.phase(), CombatPhase::Aborted);
        assert_eq!(s, before);
        assert_eq!(
            session.record().map(|r| r.resolution),
            Some(CombatResolution::Aborted)
        );
    }

    #[test]
    fn abort_after_target_moved_leaves_cell_alone() {
        let mut s = state("9C", &["7D"]);
        let mut session = CombatSession::initiate(&s, TARGET).unwrap();
        session.confirm_selection(&mut s, Some(card("7D"))).unwrap();
        s.board.take(TARGET).unwrap();
        let before = s.clone();

        let record = session.report_roll_aborted(&mut s).unwrap();
        assert_eq!(record.resolution, CombatResolution::Aborted);
        assert_eq!(s, before);
        assert_eq!(s.board.cell(TARGET).unwrap(), &Cell::EMPTY);
    }

    #[test]
    fn cancel_after_target_collected_does_not_duplicate() {
        let mut s = state("9C", &[]);
        let mut session = CombatSession::initiate(&s, TARGET).unwrap();
        s.collect(TARGET).unwrap();
        let before = s.clone();

        session.cancel_setup(&mut s).unwrap();
        assert_eq!(session.phase(), CombatPhase::Cancelled);
        assert_eq!(s, before);
        assert_eq!(s.board.card_at(TARGET).unwrap(), None);
        assert!(s.hand.contains(&card("9C")));
    }

    #[test]
    fn missing_danger_die_loses() {
        let mut s = state("9C", &[]);
        let mut session = CombatSession::initiate(&s, TARGET).unwrap();
        session.confirm_selection(&mut s, None).unwrap();
        let rolls = RollResults {
            difference: vec![1; 6],
            danger: None,
        };
        session.supply_roll_results(&mut s, rolls).unwrap();
        assert!(!session.outcome().unwrap().won);
    }

    #[test]
    fn exhausted_dice_abort_the_roll() {
        let mut s = state("9C", &["7D"]);
        let before = s.clone();
        let mut session = CombatSession::initiate(&s, TARGET).unwrap();
        session.confirm_selection(&mut s, Some(card("7D"))).unwrap();

        let mut dice = ScriptedDice::new([1, 2]);
        assert_eq!(session.roll(&mut s, &mut dice), Ok(CombatPhase::Aborted));
        assert_eq!(s, before);
    }

    #[test]
    fn rolled_win_trail() {
        let mut s = state("4C", &["4H"]);
        let mut session = CombatSession::initiate(&s, TARGET).unwrap();
        session.confirm_selection(&mut s, Some(card("4H"))).unwrap();
        let mut dice = ScriptedDice::new([2, 6, 1]);
        assert_eq!(session.roll(&mut s, &mut dice), Ok(CombatPhase::ResultsShown));

        let record = session.acknowledge_results().unwrap();
        assert_eq!(record.resolution, CombatResolution::Won { automatic: false });
        assert_eq!(record.spent, Some(card("4H")));
        assert_eq!(
            session.trail(),
            &[
                CombatPhase::Setup,
                CombatPhase::Rolling,
                CombatPhase::Finalized,
                CombatPhase::ResultsShown,
                CombatPhase::Closed,
            ]
        );
        assert!(session.phase().is_terminal());
    }

    #[test]
    fn notices_follow_phases() {
        let mut s = state("9C", &[]);
        let mut session = CombatSession::initiate(&s, TARGET).unwrap();
        session.confirm_selection(&mut s, None).unwrap();
        session
            .supply_roll_results(&mut s, RollResults::new(vec![1, 2, 3, 4, 5, 6], 2))
            .unwrap();
        let kinds: Vec<&str> = session
            .take_notices()
            .iter()
            .map(|n| match n.kind {
                NoticeKind::ChooseValueCard { .. } => "choose",
                NoticeKind::AutoWin { .. } => "auto",
                NoticeKind::RollRequired { .. } => "roll",
                NoticeKind::Results { .. } => "results",
                NoticeKind::Cancelled => "cancelled",
                NoticeKind::Aborted => "aborted",
            })
            .collect();
        assert_eq!(kinds, vec!["choose", "roll", "results"]);
    }

    #[test]
    fn phase_display() {
        assert_eq!(CombatPhase::ResultsShown.to_string(), "results");
        assert_eq!(
            CombatError::InvalidTransition {
                operation: "roll",
                phase: CombatPhase::Setup
            }
            .to_string(),
            "cannot roll during setup"
        );
    }
}
