//! Command lookup table - the cross-module command index.
//!
//! One case-insensitive index from command name to every descriptor that
//! provides it, built in two phases: direct commands first, aliases second.
//! Aliases only resolve once every module's direct exports are in the
//! table, so the result does not depend on module enumeration order.
//!
//! Collisions are legitimate: two modules exporting the same name both keep
//! their entries, and an alias whose target is missing keeps an empty entry
//! rather than failing. Compatibility lookups are a best-effort heuristic,
//! so degraded entries beat hard errors.

use tracing::{debug, trace};

use crate::core::command::CommandDescriptor;
use crate::core::profile::Profile;
use crate::util::caseless::{fold, CaselessMap};

/// Case-insensitive index: command name -> providing descriptors.
///
/// The descriptor list is ordered and never deduplicated; an entry per
/// providing module/version. Alias entries share descriptor identity with
/// their target's entries.
#[derive(Debug, Default)]
pub struct CommandLookupTable {
    entries: CaselessMap<Vec<CommandDescriptor>>,
}

impl CommandLookupTable {
    /// Build the table from every module/version pair in a profile.
    pub fn build(profile: &Profile) -> CommandLookupTable {
        let mut entries: CaselessMap<Vec<CommandDescriptor>> = CaselessMap::new();

        // Phase 1: direct commands. Every cmdlet and function lands under
        // its own name; same-name exports from different modules all stay.
        for module in profile.all_module_versions() {
            for cmdlet in module.cmdlets().values() {
                entries
                    .entry_or_default(cmdlet.name())
                    .push(CommandDescriptor::Cmdlet(cmdlet.clone()));
            }
            for function in module.functions().values() {
                entries
                    .entry_or_default(function.name())
                    .push(CommandDescriptor::Function(function.clone()));
            }
        }

        let direct_names = entries.len();

        // Phase 2: aliases, against the complete phase-1 table. The alias
        // relation is walked transitively with a visited set, so chains
        // resolve wherever a path to a direct command exists and cycles
        // terminate quietly. First binding wins for the relation used by
        // the walk; every binding still contributes descriptors below.
        let mut alias_relation: CaselessMap<&str> = CaselessMap::new();
        for module in profile.all_module_versions() {
            for (alias, target) in module.aliases() {
                if !alias_relation.contains(alias) {
                    alias_relation.insert(alias.clone(), target.as_str());
                }
            }
        }

        let mut resolved = Vec::new();
        for module in profile.all_module_versions() {
            for (alias, target) in module.aliases() {
                match resolve_target(target, &alias_relation, &entries) {
                    Some(list) => resolved.push((alias.clone(), list)),
                    None => {
                        trace!(alias = %alias, target = %target, "alias target unresolved");
                        resolved.push((alias.clone(), Vec::new()));
                    }
                }
            }
        }
        for (alias, list) in resolved {
            entries.entry_or_default(&alias).extend(list);
        }

        debug!(
            direct_names,
            total_names = entries.len(),
            "built command lookup table"
        );

        CommandLookupTable { entries }
    }

    /// Look up every descriptor providing a command name, ignoring case.
    ///
    /// `Some(&[])` means the name is known but resolved to nothing (an
    /// alias whose target never materialized); `None` means the name is
    /// unknown entirely.
    pub fn lookup(&self, name: &str) -> Option<&[CommandDescriptor]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// Whether the name is known, ignoring case.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains(name)
    }

    /// Number of distinct command names (including seeded alias names).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, descriptors)` pairs, sorted by folded name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CommandDescriptor])> {
        self.entries.iter().map(|(name, list)| (name, list.as_slice()))
    }
}

/// Follow the alias relation from `target` to a name with direct
/// descriptors.
///
/// Returns the descriptor list to link (clones share identity), or `None`
/// when the chain dead-ends or cycles.
fn resolve_target(
    target: &str,
    alias_relation: &CaselessMap<&str>,
    entries: &CaselessMap<Vec<CommandDescriptor>>,
) -> Option<Vec<CommandDescriptor>> {
    let mut current = target;
    let mut visited = vec![fold(current)];

    loop {
        match entries.get(current) {
            Some(list) if !list.is_empty() => return Some(list.clone()),
            _ => {}
        }

        let next = *alias_relation.get(current)?;
        let folded = fold(next);
        if visited.contains(&folded) {
            trace!(target = %target, "alias cycle detected");
            return None;
        }
        visited.push(folded);
        current = next;
    }
}
