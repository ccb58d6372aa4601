use chainopt::{demo_data, report, DesignEngine, DesignRequest, Network, SolverFactory};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let network = Network::from_config(&demo_data::demo_config())?;
    let engine = DesignEngine::new(SolverFactory::default_solver());

    let requests = [
        DesignRequest::new("cost_optimal"),
        DesignRequest::new("emission_optimal"),
        DesignRequest::new("jobs_optimal"),
        DesignRequest::new("weighted_sum"),
        DesignRequest::new("epsilon_constrained")
            .with_param("epsilon_emissions", 230_000.0)
            .with_param("epsilon_jobs", 250.0),
        DesignRequest::new("lexicographic"),
        DesignRequest::new("goal_programming"),
    ];

    for request in &requests {
        match engine.run_request(&network, request, None) {
            Ok(design) => report::print_design(&design),
            Err(err) => println!("--- {} ---\nfailed: {err}\n", request.method),
        }
    }

    Ok(())
}
