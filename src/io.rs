use crate::model::{
    Location, LocationConstraints, LocationId, RoleId, Roster, ShiftType, StaffId, StaffMember,
};
use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de personnel depuis CSV. Header attendu :
/// `id,name,role[,group][,preferred_locations][,preferred_shifts][,max_consecutive_days][,leave_dates]`
/// Les listes internes sont séparées par `;` ; un id vide est généré.
pub fn import_staff_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<StaffMember>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(1).context("missing name")?.trim();
        let role = rec.get(2).context("missing role")?.trim();
        if name.is_empty() || role.is_empty() {
            bail!("invalid staff row (empty name or role)");
        }

        let id = match rec.get(0).map(str::trim) {
            Some(raw) if !raw.is_empty() => StaffId::new(raw),
            _ => StaffId::random(),
        };
        let mut member = StaffMember::new(id.as_str(), name.to_string(), role);

        if let Some(group) = rec.get(3).map(str::trim) {
            if !group.is_empty() {
                member.group = Some(group.to_string());
            }
        }
        if let Some(raw) = rec.get(4).map(str::trim) {
            member.preferences.preferred_locations = split_list(raw).map(LocationId::new).collect();
        }
        if let Some(raw) = rec.get(5).map(str::trim) {
            member.preferences.preferred_shifts = split_list(raw)
                .map(parse_shift_type)
                .collect::<anyhow::Result<Vec<_>>>()
                .with_context(|| format!("invalid preferred_shifts for {name}"))?;
        }
        if let Some(raw) = rec.get(6).map(str::trim) {
            if !raw.is_empty() {
                let cap: u32 = raw
                    .parse()
                    .with_context(|| format!("invalid max_consecutive_days for {name}"))?;
                member.preferences.max_consecutive_days = Some(cap);
            }
        }
        if let Some(raw) = rec.get(7).map(str::trim) {
            member.constraints.leave_dates = split_list(raw)
                .map(parse_date)
                .collect::<anyhow::Result<Vec<_>>>()
                .with_context(|| format!("invalid leave_dates for {name}"))?;
        }

        out.push(member);
    }
    Ok(out)
}

/// Import de sites depuis CSV. Header attendu :
/// `id,name,priority,min_staff_required[,required_roles]`
pub fn import_locations_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Location>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(1).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid location row (empty name)");
        }
        let priority: i32 = rec
            .get(2)
            .context("missing priority")?
            .trim()
            .parse()
            .with_context(|| format!("invalid priority for {name}"))?;
        let min_staff_required: u32 = rec
            .get(3)
            .context("missing min_staff_required")?
            .trim()
            .parse()
            .with_context(|| format!("invalid min_staff_required for {name}"))?;

        let id = match rec.get(0).map(str::trim) {
            Some(raw) if !raw.is_empty() => LocationId::new(raw),
            _ => LocationId::random(),
        };
        let mut location = Location::new(id.as_str(), name.to_string(), priority, min_staff_required);

        if let Some(raw) = rec.get(4).map(str::trim) {
            let required_roles: Vec<RoleId> = split_list(raw).map(RoleId::new).collect();
            if !required_roles.is_empty() {
                location.constraints = Some(LocationConstraints { required_roles });
            }
        }

        out.push(location);
    }
    Ok(out)
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(';').map(str::trim).filter(|s| !s.is_empty())
}

fn parse_shift_type(raw: &str) -> anyhow::Result<ShiftType> {
    match raw.to_ascii_lowercase().as_str() {
        "morning" => Ok(ShiftType::Morning),
        "afternoon" => Ok(ShiftType::Afternoon),
        "night" => Ok(ShiftType::Night),
        other => bail!("unknown shift type: {other}"),
    }
}

fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").with_context(|| format!("invalid date: {raw}"))
}

/// Export JSON du tableau de service (jolie mise en forme)
pub fn export_roster_json<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(roster)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV des affectations : header `id,date,location_id,staff_id,shift_type,status`
pub fn export_assignments_csv<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["id", "date", "location_id", "staff_id", "shift_type", "status"])?;
    let mut id_buf = itoa::Buffer::new();
    for a in &roster.assignments {
        let date = a.date.to_string();
        w.write_record([
            id_buf.format(a.id),
            date.as_str(),
            a.location_id.as_str(),
            a.staff_id.as_str(),
            a.shift_type.as_str(),
            a.status.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
