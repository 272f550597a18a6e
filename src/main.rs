use proyecto2::process::Process;
use proyecto2::scheduler::SchedulerType;
use proyecto2::sim::{random_workload, run_simulation};

const QUANTUM: u32 = 2;

fn main() {
    println!("========================================");
    println!("   DEMO SIMULADOR: RR + SPN + SRT + HRRN");
    println!("========================================\n");

    // Carga de trabajo fija para poder comparar las cuatro políticas
    // sobre exactamente los mismos procesos.
    let workload = vec![
        Process::new(0, 4),
        Process::new(1, 2),
        Process::new(3, 5),
        Process::new(3, 1),
        Process::new(9, 2),
    ];

    println!("Procesos de la corrida:");
    for (idx, p) in workload.iter().enumerate() {
        println!(
            "  P{idx}: llegada={} servicio={}",
            p.start_time, p.total_time_needed
        );
    }
    println!();

    let policies = [
        (SchedulerType::RoundRobin, "Round Robin (quantum=2)"),
        (SchedulerType::ShortestProcessNext, "Shortest Process Next"),
        (SchedulerType::ShortestRemainingTime, "Shortest Remaining Time"),
        (
            SchedulerType::HighestResponseRatioNext,
            "Highest Response Ratio Next",
        ),
    ];

    for (kind, name) in policies {
        match run_simulation(kind, workload.clone(), QUANTUM) {
            Ok(report) => report.print_report(name),
            Err(e) => println!("error corriendo {name}: {e}"),
        }
    }

    println!("----------------------------------------");
    println!("Carga al azar: espera promedio por política");
    println!("----------------------------------------");

    // Con una carga al azar grande se nota la tendencia: SPN/SRT/HRRN
    // deberían dar menos espera promedio que RR.
    let random = random_workload(30);
    for (kind, name) in policies {
        match run_simulation(kind, random.clone(), QUANTUM) {
            Ok(report) => println!(
                "  {name}: espera promedio={:.2} ({} ticks)",
                report.average_waiting(),
                report.total_ticks()
            ),
            Err(e) => println!("  error corriendo {name}: {e}"),
        }
    }

    println!("\nDemo terminada.");
}
