use crate::process::{Process, ProcessIndex};

pub mod util;

mod hrrn;
mod rr;
mod spn;
mod srt;

pub use hrrn::HighestResponseRatioNext;
pub use rr::RoundRobin;
pub use spn::ShortestProcessNext;
pub use srt::ShortestRemainingTime;

/// Disciplinas de planificación soportadas por el simulador.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerType {
    RoundRobin,
    ShortestProcessNext,
    ShortestRemainingTime,
    HighestResponseRatioNext,
}

/// Estado de un planificador para **una** corrida de simulación.
///
/// Cada variante envuelve el estado privado de su política (cola de
/// listos, contadores). Una corrida usa exactamente una instancia y la
/// misma política de principio a fin; para otra corrida se crea una
/// instancia nueva, sin estáticos globales que contaminen entre corridas.
pub enum Scheduler {
    /// Guarda además el quantum configurado para la corrida.
    RoundRobin(RoundRobin, u32),
    ShortestProcessNext(ShortestProcessNext),
    ShortestRemainingTime(ShortestRemainingTime),
    HighestResponseRatioNext(HighestResponseRatioNext),
}

impl Scheduler {
    /// Crea el estado inicial para la política `kind`.
    ///
    /// `quantum` sólo lo usa Round Robin; las demás políticas lo ignoran.
    pub fn new(kind: SchedulerType, quantum: u32) -> Self {
        match kind {
            SchedulerType::RoundRobin => Scheduler::RoundRobin(RoundRobin::new(quantum), quantum),
            SchedulerType::ShortestProcessNext => {
                Scheduler::ShortestProcessNext(ShortestProcessNext::new())
            }
            SchedulerType::ShortestRemainingTime => {
                Scheduler::ShortestRemainingTime(ShortestRemainingTime::new())
            }
            SchedulerType::HighestResponseRatioNext => {
                Scheduler::HighestResponseRatioNext(HighestResponseRatioNext::new())
            }
        }
    }

    /// Pide el índice del proceso que debe ocupar el procesador en el tick
    /// `cur_time`. `None` significa procesador ocioso este tick.
    ///
    /// El driver debe llamar esto una vez por tick, con `cur_time`
    /// estrictamente creciente, y actualizar `time_scheduled`/`is_done`
    /// del elegido antes del siguiente tick.
    pub fn select(&mut self, cur_time: u32, table: &[Process]) -> Option<ProcessIndex> {
        match self {
            Scheduler::RoundRobin(rr, quantum) => rr.select(cur_time, table, *quantum),
            Scheduler::ShortestProcessNext(spn) => spn.select(cur_time, table),
            Scheduler::ShortestRemainingTime(srt) => srt.select(cur_time, table),
            Scheduler::HighestResponseRatioNext(hrrn) => hrrn.select(cur_time, table),
        }
    }
}
