use crate::process::{Process, ProcessIndex};

/// Ticks que le faltan a un proceso para completarse.
pub fn remaining_time(p: &Process) -> u32 {
    p.total_time_needed - p.time_scheduled
}

/// Ticks que el proceso lleva esperando sin CPU desde que llegó.
///
/// Sólo tiene sentido para procesos que ya llegaron
/// (`start_time <= cur_time`); para los demás la resta no está definida.
pub fn waiting_time(p: &Process, cur_time: u32) -> u32 {
    cur_time - p.start_time - p.time_scheduled
}

/// Response ratio de HRRN: `(espera + servicio) / servicio`.
///
/// Un proceso que acaba de llegar tiene ratio 1.0, y el ratio crece
/// mientras espera; los servicios cortos crecen más rápido.
pub fn response_ratio(p: &Process, cur_time: u32) -> f32 {
    let waiting = waiting_time(p, cur_time);
    (waiting + p.total_time_needed) as f32 / p.total_time_needed as f32
}

/// Agrega al final de `ready` todos los procesos que llegan exactamente en
/// `cur_time`, en orden de tabla.
///
/// Como el driver llama a `select` una vez por tick con tiempos
/// estrictamente crecientes, cada proceso entra a su cola de listos una
/// única vez: el tick de su llegada.
pub fn push_arrivals<C>(cur_time: u32, table: &[Process], ready: &mut C)
where
    C: Extend<ProcessIndex>,
{
    ready.extend(
        table
            .iter()
            .enumerate()
            .filter(|(_, p)| p.start_time == cur_time)
            .map(|(idx, _)| idx),
    );
}
