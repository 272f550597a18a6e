use crate::process::{Process, ProcessIndex};

/// Resultado de una corrida completa: el cronograma tick a tick y las
/// métricas clásicas por proceso.
pub struct SimReport {
    /// La tabla tal como quedó al final (todos con `is_done`).
    pub table: Vec<Process>,
    /// Qué proceso corrió en cada tick (`None` = procesador ocioso).
    pub schedule: Vec<Option<ProcessIndex>>,
    /// Tick en el que cada proceso ejecutó su último tick de servicio.
    pub finish_tick: Vec<Option<u32>>,
}

impl SimReport {
    pub(crate) fn new(
        table: Vec<Process>,
        schedule: Vec<Option<ProcessIndex>>,
        finish_tick: Vec<Option<u32>>,
    ) -> Self {
        Self {
            table,
            schedule,
            finish_tick,
        }
    }

    /// Ticks totales que duró la corrida.
    pub fn total_ticks(&self) -> u32 {
        self.schedule.len() as u32
    }

    /// Turnaround de un proceso: desde que llegó hasta que completó
    /// (un proceso que termina durante el tick `t` completa al final de
    /// ese tick, por eso el `+ 1`).
    pub fn turnaround(&self, idx: ProcessIndex) -> Option<u32> {
        let finish = self.finish_tick[idx]?;
        Some(finish + 1 - self.table[idx].start_time)
    }

    /// Ticks que el proceso pasó esperando: turnaround menos servicio.
    pub fn waiting(&self, idx: ProcessIndex) -> Option<u32> {
        let turnaround = self.turnaround(idx)?;
        Some(turnaround - self.table[idx].total_time_needed)
    }

    /// Fracción de ticks en que el procesador estuvo ocupado.
    pub fn cpu_utilization(&self) -> f32 {
        if self.schedule.is_empty() {
            return 0.0;
        }
        let busy = self.schedule.iter().filter(|s| s.is_some()).count();
        busy as f32 / self.schedule.len() as f32
    }

    /// Promedio de espera sobre todos los procesos.
    pub fn average_waiting(&self) -> f32 {
        let total: u32 = (0..self.table.len()).filter_map(|i| self.waiting(i)).sum();
        total as f32 / self.table.len() as f32
    }

    /// Imprime el cronograma y las métricas de la corrida.
    pub fn print_report(&self, title: &str) {
        println!("=== {title} ===");

        // cronograma compacto: un casillero por tick
        print!("  ticks: ");
        for slot in &self.schedule {
            match slot {
                Some(idx) => print!("P{idx} "),
                None => print!("-- "),
            }
        }
        println!();

        for (idx, p) in self.table.iter().enumerate() {
            println!(
                "  P{idx}: llegada={} servicio={} turnaround={:?} espera={:?}",
                p.start_time,
                p.total_time_needed,
                self.turnaround(idx),
                self.waiting(idx),
            );
        }

        println!(
            "  total={} ticks, utilización={:.2}, espera promedio={:.2}\n",
            self.total_ticks(),
            self.cpu_utilization(),
            self.average_waiting(),
        );
    }
}
