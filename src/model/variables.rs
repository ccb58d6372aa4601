use crate::domain::{Network, VarId, Variable};

/// Decision variables for one strategy request.
///
/// Every request builds its own pool, so concurrent callers sharing a
/// network never touch the same variables. Layout: plant open
/// indicators, DC open indicators, plant→DC flows (row-major),
/// DC→customer flows (row-major), then any variables a strategy
/// registers afterwards (goal-programming deviations).
#[derive(Debug)]
pub struct NetworkVariables {
    defs: Vec<Variable>,
    num_plants: usize,
    num_dcs: usize,
    num_customers: usize,
}

impl NetworkVariables {
    pub fn new(network: &Network) -> Self {
        let num_plants = network.plants().len();
        let num_dcs = network.dcs().len();
        let num_customers = network.customers().len();

        let mut defs =
            Vec::with_capacity(num_plants + num_dcs + num_plants * num_dcs + num_dcs * num_customers);
        for plant in network.plants() {
            defs.push(Variable::binary(format!("open_{}", plant.id)));
        }
        for dc in network.dcs() {
            defs.push(Variable::binary(format!("open_{}", dc.id)));
        }
        for plant in network.plants() {
            for dc in network.dcs() {
                defs.push(Variable::continuous(format!("flow_{}_{}", plant.id, dc.id)));
            }
        }
        for dc in network.dcs() {
            for customer in network.customers() {
                defs.push(Variable::continuous(format!("flow_{}_{}", dc.id, customer.id)));
            }
        }

        Self {
            defs,
            num_plants,
            num_dcs,
            num_customers,
        }
    }

    pub fn open_plant(&self, plant: usize) -> VarId {
        debug_assert!(plant < self.num_plants);
        VarId::new(plant)
    }

    pub fn open_dc(&self, dc: usize) -> VarId {
        debug_assert!(dc < self.num_dcs);
        VarId::new(self.num_plants + dc)
    }

    pub fn flow_plant_dc(&self, plant: usize, dc: usize) -> VarId {
        debug_assert!(plant < self.num_plants && dc < self.num_dcs);
        VarId::new(self.num_plants + self.num_dcs + plant * self.num_dcs + dc)
    }

    pub fn flow_dc_customer(&self, dc: usize, customer: usize) -> VarId {
        debug_assert!(dc < self.num_dcs && customer < self.num_customers);
        VarId::new(
            self.num_plants
                + self.num_dcs
                + self.num_plants * self.num_dcs
                + dc * self.num_customers
                + customer,
        )
    }

    /// Registers an extra variable (strategy-owned, e.g. a deviation)
    /// and returns its id.
    pub fn register(&mut self, variable: Variable) -> VarId {
        let id = VarId::new(self.defs.len());
        self.defs.push(variable);
        id
    }

    pub fn defs(&self) -> &[Variable] {
        &self.defs
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}
