// sim - el driver que avanza el reloj tick a tick y cierra el ciclo:
// select → ejecutar un tick → actualizar la tabla → siguiente tick

pub mod report;

pub use report::SimReport;

use rand::{thread_rng, Rng};

use crate::process::{all_done, validate_table, Process, ProcessIndex};
use crate::scheduler::{Scheduler, SchedulerType};

/// Corre la simulación completa de `table` con la política `kind`.
///
/// El driver hace el trabajo que los schedulers asumen hecho: después de
/// cada tick le suma 1 al `time_scheduled` del proceso que corrió y marca
/// `is_done` cuando alcanza su `total_time_needed`, siempre antes del
/// `select` del tick siguiente. La corrida termina cuando todos los
/// procesos completaron.
///
/// `quantum` sólo aplica a Round Robin (debe ser >= 1 en ese caso).
///
/// ```rust
/// use proyecto2::process::Process;
/// use proyecto2::scheduler::SchedulerType;
/// use proyecto2::sim::run_simulation;
///
/// let table = vec![Process::new(0, 4), Process::new(1, 2)];
/// let report = run_simulation(SchedulerType::RoundRobin, table, 2).unwrap();
/// assert_eq!(report.schedule, vec![Some(0), Some(0), Some(1), Some(1), Some(0), Some(0)]);
/// ```
pub fn run_simulation(
    kind: SchedulerType,
    mut table: Vec<Process>,
    quantum: u32,
) -> Result<SimReport, &'static str> {
    validate_table(&table)?;
    if kind == SchedulerType::RoundRobin && quantum == 0 {
        return Err("quantum must be >= 1");
    }

    let mut scheduler = Scheduler::new(kind, quantum);
    let mut schedule: Vec<Option<ProcessIndex>> = Vec::new();
    let mut finish_tick: Vec<Option<u32>> = vec![None; table.len()];

    let mut cur_time: u32 = 0;
    while !all_done(&table) {
        let selected = scheduler.select(cur_time, &table);

        // SPN puede devolver el índice de un proceso ya terminado cuando
        // hay un hueco entre su completación y la siguiente llegada; eso
        // cuenta como tick ocioso
        let running = selected.filter(|&idx| !table[idx].is_done);

        if let Some(idx) = running {
            let p = &mut table[idx];
            p.time_scheduled += 1;
            if p.time_scheduled == p.total_time_needed {
                p.is_done = true;
                finish_tick[idx] = Some(cur_time);
            }
        }

        schedule.push(running);
        cur_time += 1;
    }

    Ok(SimReport::new(table, schedule, finish_tick))
}

/// Genera una tabla de `n` procesos con llegadas y servicios al azar,
/// para demos y pruebas de estrés.
pub fn random_workload(n: usize) -> Vec<Process> {
    let mut rng = thread_rng();
    (0..n)
        .map(|_| Process::new(rng.gen_range(0..20), rng.gen_range(1..=10)))
        .collect()
}
