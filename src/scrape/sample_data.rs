// src/scrape/sample_data.rs
//! Offline species lists used when a scrape yields nothing.

use crate::model::Species;

fn entry(
    name: &str,
    scientific_name: &str,
    status: &str,
    population: &str,
    habitat: &str,
    threats: &str,
) -> Species {
    Species::new(name, scientific_name, status).with_field_notes(population, habitat, threats)
}

/// Sample species for `code`, or a single placeholder entry for other codes.
pub fn sample_species(code: &str) -> Vec<Species> {
    match code {
        "US" => vec![
            entry("California Condor", "Gymnogyps californianus", "Critically Endangered", "~500", "Mountains and forests", "Habitat loss, lead poisoning"),
            entry("Florida Panther", "Puma concolor coryi", "Endangered", "~200", "Swamps and forests", "Habitat fragmentation, vehicle collisions"),
            entry("Hawaiian Monk Seal", "Neomonachus schauinslandi", "Endangered", "~1,400", "Hawaiian Islands", "Climate change, marine debris"),
            entry("Red Wolf", "Canis rufus", "Critically Endangered", "~20 in wild", "Forests and wetlands", "Hybridization, habitat loss"),
            entry("Ocelot", "Leopardus pardalis", "Endangered", "~100 in US", "Dense thorny scrubland", "Habitat loss, vehicle strikes"),
        ],
        "BR" => vec![
            entry("Golden Lion Tamarin", "Leontopithecus rosalia", "Endangered", "~3,200", "Atlantic Forest", "Deforestation, illegal pet trade"),
            entry("Hyacinth Macaw", "Anodorhynchus hyacinthinus", "Vulnerable", "~6,500", "Pantanal wetlands", "Illegal trade, habitat loss"),
            entry("Jaguar", "Panthera onca", "Near Threatened", "~170,000", "Rainforests and wetlands", "Deforestation, poaching"),
            entry("Amazon River Dolphin", "Inia geoffrensis", "Endangered", "Unknown", "Amazon River system", "Dam construction, pollution"),
            entry("Black Lion Tamarin", "Leontopithecus chrysopygus", "Endangered", "~1,000", "Atlantic Forest", "Habitat fragmentation"),
        ],
        "CN" => vec![
            entry("Giant Panda", "Ailuropoda melanoleuca", "Vulnerable", "~1,800", "Mountain bamboo forests", "Habitat loss, low birth rate"),
            entry("South China Tiger", "Panthera tigris amoyensis", "Critically Endangered", "~0 in wild", "Temperate forests", "Poaching, habitat loss"),
            entry("Chinese Alligator", "Alligator sinensis", "Critically Endangered", "~150 in wild", "Yangtze River wetlands", "Habitat destruction, pollution"),
            entry("Yangtze Finless Porpoise", "Neophocaena asiaeorientalis", "Critically Endangered", "~1,000", "Yangtze River", "Pollution, boat traffic"),
            entry("Crested Ibis", "Nipponia nippon", "Endangered", "~2,600", "Wetlands and rice paddies", "Habitat loss, pesticides"),
        ],
        "IN" => vec![
            entry("Bengal Tiger", "Panthera tigris tigris", "Endangered", "~3,000", "Forests and grasslands", "Poaching, habitat loss"),
            entry("Asian Elephant", "Elephas maximus", "Endangered", "~27,000 in India", "Forests and grasslands", "Habitat fragmentation, human conflict"),
            entry("Indian Rhinoceros", "Rhinoceros unicornis", "Vulnerable", "~3,700", "Grasslands and riverine areas", "Poaching, habitat loss"),
            entry("Ganges River Dolphin", "Platanista gangetica", "Endangered", "~3,500", "Ganges River system", "Pollution, dam construction"),
            entry("Snow Leopard", "Panthera uncia", "Vulnerable", "~500 in India", "High mountain regions", "Poaching, climate change"),
        ],
        "AU" => vec![
            entry("Koala", "Phascolarctos cinereus", "Vulnerable", "~100,000", "Eucalyptus forests", "Habitat loss, disease, bushfires"),
            entry("Numbat", "Myrmecobius fasciatus", "Endangered", "~1,000", "Eucalyptus woodlands", "Predation by foxes and cats"),
            entry("Leadbeater's Possum", "Gymnobelideus leadbeateri", "Critically Endangered", "~1,500", "Mountain ash forests", "Logging, bushfires"),
            entry("Northern Hairy-nosed Wombat", "Lasiorhinus krefftii", "Critically Endangered", "~300", "Semi-arid grasslands", "Competition with cattle, drought"),
            entry("Tasmanian Devil", "Sarcophilus harrisii", "Endangered", "~25,000", "Tasmanian forests", "Devil facial tumour disease"),
        ],
        "KE" => vec![
            entry("Black Rhinoceros", "Diceros bicornis", "Critically Endangered", "~750 in Kenya", "Savannas and forests", "Poaching for horn"),
            entry("African Wild Dog", "Lycaon pictus", "Endangered", "~600 in Kenya", "Savannas and grasslands", "Habitat fragmentation, human conflict"),
            entry("Grevy's Zebra", "Equus grevyi", "Endangered", "~2,800", "Semi-arid grasslands", "Habitat loss, competition with livestock"),
            entry("Hirola", "Beatragus hunteri", "Critically Endangered", "~500", "Semi-arid grasslands", "Drought, habitat loss, disease"),
            entry("Mountain Bongo", "Tragelaphus eurycerus isaaci", "Critically Endangered", "~100 in wild", "Mountain forests", "Poaching, habitat loss"),
        ],
        "MG" => vec![
            entry("Aye-aye", "Daubentonia madagascariensis", "Endangered", "Unknown", "Rainforests", "Deforestation, persecution"),
            entry("Indri", "Indri indri", "Critically Endangered", "~10,000", "Rainforests", "Habitat loss, hunting"),
            entry("Silky Sifaka", "Propithecus candidus", "Critically Endangered", "~250", "Mountain rainforests", "Habitat loss, hunting"),
            entry("Radiated Tortoise", "Astrochelys radiata", "Critically Endangered", "Unknown", "Spiny forests", "Illegal pet trade, habitat loss"),
            entry("Ploughshare Tortoise", "Astrochelys yniphora", "Critically Endangered", "~500", "Bamboo scrub", "Illegal pet trade"),
        ],
        "ID" => vec![
            entry("Sumatran Tiger", "Panthera tigris sumatrae", "Critically Endangered", "~400", "Tropical rainforests", "Poaching, deforestation"),
            entry("Sumatran Orangutan", "Pongo abelii", "Critically Endangered", "~14,000", "Tropical rainforests", "Habitat loss, illegal trade"),
            entry("Javan Rhinoceros", "Rhinoceros sondaicus", "Critically Endangered", "~70", "Tropical rainforests", "Poaching, habitat loss"),
            entry("Sumatran Rhinoceros", "Dicerorhinus sumatrensis", "Critically Endangered", "~80", "Tropical rainforests", "Poaching, habitat loss"),
            entry("Komodo Dragon", "Varanus komodoensis", "Endangered", "~3,000", "Islands of Indonesia", "Habitat loss, climate change"),
        ],
        _ => vec![entry(
            "Data unavailable",
            "N/A",
            "Please check IUCN Red List",
            "Unknown",
            "Various",
            "Multiple factors",
        )],
    }
}
