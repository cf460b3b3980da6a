//! Simulation data endpoints

use crate::ApiClient;
use crate::error::Result;
use matchday_core::domain::prediction::{MatchPrediction, Standing};
use matchday_core::domain::simulation::{Simulation, SimulationId};

impl ApiClient {
    /// List all known simulations
    ///
    /// # Returns
    /// Every completed simulation, in server (creation) order
    pub async fn list_simulations(&self) -> Result<Vec<Simulation>> {
        let url = format!("{}/api/simulations", self.base_url());
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Delete all simulation data held by the service
    ///
    /// Removes every simulation together with its predictions and standings.
    pub async fn clear_simulations(&self) -> Result<()> {
        let url = format!("{}/api/simulations", self.base_url());
        let response = self.client.delete(&url).send().await?;

        self.handle_empty_response(response).await
    }

    /// Fetch the predicted matches of a simulation
    ///
    /// # Arguments
    /// * `simulation_id` - The simulation to read
    pub async fn list_matches(&self, simulation_id: SimulationId) -> Result<Vec<MatchPrediction>> {
        let url = format!("{}/api/matches?simulation={}", self.base_url(), simulation_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Fetch the simulated league table of a simulation
    ///
    /// # Arguments
    /// * `simulation_id` - The simulation to read
    pub async fn list_table(&self, simulation_id: SimulationId) -> Result<Vec<Standing>> {
        let url = format!("{}/api/table?simulation={}", self.base_url(), simulation_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }
}
