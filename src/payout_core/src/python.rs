//! Python bindings used by the desktop front end.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::constants::{DEFAULT_WEIGHTS, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::PayoutError;
use crate::payout;
use crate::report;
use crate::weights::PayoutWeights;

impl From<PayoutError> for PyErr {
    fn from(err: PayoutError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Prize for a single finishing position.
#[pyclass(name = "Payout")]
#[derive(Clone, Debug)]
pub struct PyPayout {
    #[pyo3(get)]
    pub position: usize,

    #[pyo3(get)]
    pub amount: f64,
}

#[pymethods]
impl PyPayout {
    fn __repr__(&self) -> String {
        format!("Payout({}, {:.2})", self.position, self.amount)
    }
}

/// Pool totals and per-position prizes.
#[pyclass(name = "PayoutResult")]
#[derive(Clone, Debug)]
pub struct PyPayoutResult {
    inner: payout::PayoutResult,
}

#[pymethods]
impl PyPayoutResult {
    #[getter]
    fn player_count(&self) -> u32 {
        self.inner.player_count
    }

    #[getter]
    fn total_buy_in_pool(&self) -> f64 {
        self.inner.total_buy_in_pool
    }

    #[getter]
    fn total_food_pool(&self) -> f64 {
        self.inner.total_food_pool
    }

    #[getter]
    fn total_bounty_pool(&self) -> f64 {
        self.inner.total_bounty_pool
    }

    #[getter]
    fn paid_positions(&self) -> usize {
        self.inner.paid_positions
    }

    #[getter]
    fn payouts(&self) -> Vec<PyPayout> {
        self.inner
            .payouts
            .iter()
            .map(|p| PyPayout {
                position: p.position,
                amount: p.amount,
            })
            .collect()
    }

    fn total_collected(&self) -> f64 {
        self.inner.total_collected()
    }

    fn remaining(&self) -> f64 {
        self.inner.remaining()
    }

    /// Render the text breakdown shown in the results panel.
    fn report(&self) -> String {
        report::render_report(&self.inner)
    }

    fn __repr__(&self) -> String {
        format!(
            "PayoutResult({} players, {} paid, pool={:.2})",
            self.inner.player_count, self.inner.paid_positions, self.inner.total_buy_in_pool
        )
    }
}

/// Compute pools and payouts.
#[pyfunction]
#[pyo3(signature = (player_count, buy_in, food_per_player = 0.0, bounty_per_player = 0.0, weights = None))]
fn compute_payouts(
    player_count: u32,
    buy_in: f64,
    food_per_player: f64,
    bounty_per_player: f64,
    weights: Option<Vec<f64>>,
) -> PyResult<PyPayoutResult> {
    let weights = weights.unwrap_or_else(|| DEFAULT_WEIGHTS.to_vec());
    let inner = payout::compute_payouts(
        player_count,
        buy_in,
        food_per_player,
        bounty_per_player,
        &weights,
    )?;
    Ok(PyPayoutResult { inner })
}

/// Parse a comma-separated weight table.
#[pyfunction]
fn parse_weights(text: &str) -> PyResult<Vec<f64>> {
    Ok(PayoutWeights::parse(text)?.into())
}

#[pyfunction]
fn paid_positions(player_count: u32, weight_count: usize) -> usize {
    payout::paid_positions(player_count, weight_count)
}

#[pyfunction]
fn ordinal(position: usize) -> String {
    report::ordinal(position)
}

/// Python module definition
#[pymodule]
fn payout_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPayout>()?;
    m.add_class::<PyPayoutResult>()?;

    m.add_function(wrap_pyfunction!(compute_payouts, m)?)?;
    m.add_function(wrap_pyfunction!(parse_weights, m)?)?;
    m.add_function(wrap_pyfunction!(paid_positions, m)?)?;
    m.add_function(wrap_pyfunction!(ordinal, m)?)?;

    m.add("DEFAULT_WEIGHTS", DEFAULT_WEIGHTS.to_vec())?;
    m.add("MIN_PLAYERS", MIN_PLAYERS)?;
    m.add("MAX_PLAYERS", MAX_PLAYERS)?;

    Ok(())
}
