use crate::error::{Error, Result};
use crate::generator::TopologyGenerator;
use crate::graph::NodeId;
use crate::menu::{MENU_TEXT, MenuChoice, parse_node_count};
use crate::render::{render_matrix, render_route, render_topology};
use crate::session::Session;
use log::error;
use std::io::{BufRead, Write};

enum Flow {
    Continue,
    Exit,
}

/// Menu-driven loop over a [`Session`].
///
/// Input errors are written to `output` and the loop carries on; only I/O
/// failures end it early. End of input behaves like choosing Exit.
pub struct Shell<'a, R, W, G: TopologyGenerator> {
    session: &'a mut Session<G>,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write, G: TopologyGenerator> Shell<'a, R, W, G> {
    pub fn new(session: &'a mut Session<G>, input: R, output: W) -> Self {
        Shell {
            session,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{MENU_TEXT}")?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                break;
            };

            let outcome = line
                .parse::<MenuChoice>()
                .and_then(|choice| self.dispatch(choice));

            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(Error::Io(e)) => return Err(Error::Io(e)),
                Err(e) => {
                    if !e.is_user_error() {
                        error!("operation aborted: {e}");
                    }
                    self.report(&e)?;
                }
            }
        }
        writeln!(self.output, "Bye now!")?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Exit => return Ok(Flow::Exit),
            MenuChoice::Generate => {
                writeln!(self.output, "Generate graph selected")?;
                let Some(line) = self.prompt("Number of nodes: ")? else {
                    return Ok(Flow::Exit);
                };
                let count = parse_node_count(&line)?;
                let graph = self.session.generate(count)?;
                let (nodes, links) = (graph.node_count(), graph.edge_count());
                writeln!(
                    self.output,
                    "Generated AS graph with {nodes} nodes and {links} links"
                )?;
            }
            MenuChoice::Display => {
                writeln!(self.output, "Display graph selected")?;
                render_topology(self.session.graph().ok(), &mut self.output)?;
            }
            MenuChoice::Summary => {
                writeln!(self.output, "Shortest-path summary selected")?;
                let matrix = self.session.distance_matrix()?;
                render_matrix(&matrix, &mut self.output)?;
            }
            MenuChoice::Route => {
                writeln!(self.output, "Find path selected")?;
                self.session.graph()?;
                self.route_prompt()?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Asks for two nodes until a route can be shown; a blank line gives up.
    fn route_prompt(&mut self) -> Result<()> {
        loop {
            let Some(from) = self.read_node("Source node: ")? else {
                return Ok(());
            };
            let Some(to) = self.read_node("Destination node: ")? else {
                return Ok(());
            };

            match self.session.route(from, to) {
                Ok(route) => {
                    render_route(&route, &mut self.output)?;
                    return Ok(());
                }
                Err(e @ Error::NodeNotFound(_)) => self.report(&e)?,
                Err(e) => return Err(e),
            }
        }
    }

    fn read_node(&mut self, label: &str) -> Result<Option<NodeId>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            match trimmed.parse::<NodeId>() {
                Ok(node) => return Ok(Some(node)),
                Err(_) => self.report(&Error::NotANumber(trimmed.to_string()))?,
            }
        }
    }

    /// `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn report(&mut self, err: &Error) -> Result<()> {
        writeln!(self.output, "{err}")?;
        Ok(())
    }
}
