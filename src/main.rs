use clap::{
    crate_authors, crate_description, crate_name, crate_version, App, AppSettings, Arg,
    ArgMatches, SubCommand,
};
use derive_more::Display;
use itertools::Itertools;
use plantri_graph::{
    analysis::eccentricities,
    conjecture::{check_all, Verdict},
    graph::{AdjMatrix, Graph},
    planar_code::load,
};
use std::error::Error;

#[derive(Debug, Display, PartialEq)]
enum Err {
    #[display(fmt = "conjecture violated by {} graphs", _0)]
    ConjectureViolated(usize),
}

impl std::error::Error for Err {}

fn load_input(matches: &ArgMatches) -> Result<Vec<AdjMatrix>, Box<dyn Error>> {
    Ok(load(matches.value_of("INPUT").unwrap())?)
}

fn handle_info(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    for (i, graph) in load_input(matches)?.iter().enumerate() {
        println!("{:>6} {:>4} {:>5}", i, graph.order(), graph.size());
    }
    Ok(())
}

fn handle_eccentricities(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    for (i, graph) in load_input(matches)?.iter().enumerate() {
        println!("{:>6} [{}]", i, eccentricities(graph).values().join(", "));
    }
    Ok(())
}

fn handle_conjecture(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let input = matches.value_of("INPUT").unwrap();
    let graphs = load_input(matches)?;
    println!(
        "Testing the connected eccentricity level set conjecture for all graphs in {}...",
        input
    );
    let verdicts = check_all(&graphs)?;
    let mut num_violated = 0;
    for (i, (graph, verdict)) in graphs.iter().zip(&verdicts).enumerate() {
        println!("  conjecture holds for graph {:2}: {}", i, verdict);
        if let Verdict::Violated { eccentricities } = verdict {
            num_violated += 1;
            println!("  disconnected eccentricities: {:?}", eccentricities);
            if matches.is_present("print-graphs") {
                print!("{}", graph);
            }
        }
    }
    if num_violated > 0 {
        Err(Box::new(Err::ConjectureViolated(num_violated)))
    } else {
        Ok(())
    }
}

fn input_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("INPUT")
        .help("A plantri output file in planar_code format")
        .required(true)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = App::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("info")
                .about("Prints the order and size of each graph")
                .arg(input_arg()),
        )
        .subcommand(
            SubCommand::with_name("eccentricities")
                .about("Prints the vertex eccentricities of each graph")
                .arg(input_arg()),
        )
        .subcommand(
            SubCommand::with_name("conjecture")
                .about("Tests the connected eccentricity level set conjecture for each graph")
                .arg(input_arg())
                .arg(
                    Arg::with_name("print-graphs")
                        .help("Prints the adjacency matrix of every counterexample")
                        .long("print-graphs")
                        .takes_value(false),
                ),
        )
        .get_matches();
    if let Some(matches) = matches.subcommand_matches("info") {
        handle_info(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("eccentricities") {
        handle_eccentricities(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("conjecture") {
        handle_conjecture(matches)?;
    }
    Ok(())
}
