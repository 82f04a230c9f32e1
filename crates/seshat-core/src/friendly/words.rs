//! Vocabulary tables for [`WordPairGenerator`](super::WordPairGenerator).
//!
//! Roughly 460 adjectives by 360 animals, about 1.6e5 distinct pairs. The
//! exact cardinality is an operational parameter of alias issuance, not a
//! correctness invariant; collisions are handled by the claim loop.

pub(super) const ADJECTIVES: &[&str] = &[
    "able", "absolute", "abstract", "academic", "active", "actual", "adept", "adored",
    "advanced", "agile", "alert", "alive", "amber", "ambitious", "amiable", "ample",
    "ancient", "animated", "apt", "arctic", "ardent", "artful", "astute", "atomic",
    "austere", "autumn", "awake", "aware", "azure", "balanced", "bold", "bonny",
    "boundless", "brainy", "brave", "breezy", "brief", "bright", "brilliant", "brisk",
    "bronze", "bubbly", "busy", "calm", "candid", "capable", "careful", "caring",
    "casual", "causal", "celestial", "certain", "cheerful", "chief", "chilly", "chipper",
    "civic", "civil", "classic", "clean", "clear", "clever", "close", "cloudy",
    "cobalt", "cogent", "coherent", "colossal", "comic", "common", "compact", "complete",
    "composed", "concrete", "content", "cool", "copper", "cordial", "cosmic", "cozy",
    "crafty", "creative", "crimson", "crisp", "cryptic", "crystal", "cubic", "curious",
    "current", "daily", "dainty", "dapper", "daring", "dashing", "dazzling", "dear",
    "decent", "deep", "deft", "delicate", "dense", "devoted", "diligent", "direct",
    "discreet", "distant", "diverse", "divine", "docile", "double", "doubtless", "dreamy",
    "driven", "dry", "dual", "dulcet", "dutiful", "dynamic", "eager", "early",
    "earnest", "earthy", "eastern", "easy", "eclectic", "elastic", "elder", "electric",
    "elegant", "elemental", "eloquent", "eminent", "emerald", "endless", "enormous", "epic",
    "equal", "equatorial", "errant", "ethereal", "even", "evident", "exact", "excellent",
    "exotic", "expert", "extra", "fabled", "factual", "fair", "faithful", "famous",
    "fancy", "fast", "fearless", "fertile", "festive", "fine", "firm", "first",
    "fiscal", "fit", "fleet", "flexible", "fluent", "flying", "fond", "formal",
    "formidable", "forthright", "fortunate", "frank", "free", "fresh", "friendly", "frosty",
    "fruitful", "full", "funny", "future", "gallant", "game", "generous", "genial",
    "gentle", "genuine", "giant", "gifted", "gilded", "glad", "gleaming", "global",
    "glorious", "golden", "good", "graceful", "gracious", "grand", "grateful", "great",
    "green", "gritty", "guiding", "handy", "happy", "hardy", "harmonic", "hearty",
    "heroic", "hidden", "high", "honest", "hopeful", "humane", "humble", "icy",
    "ideal", "idle", "immense", "immortal", "indigo", "infinite", "informal", "ingenious",
    "inner", "intent", "intrepid", "inventive", "iron", "ivory", "jade", "jaunty",
    "jolly", "jovial", "joyful", "jubilant", "just", "keen", "kind", "kindred",
    "knowing", "large", "lasting", "lavish", "lawful", "leading", "learned", "legal",
    "legible", "lenient", "level", "liberal", "light", "likely", "limber", "linear",
    "literal", "lively", "local", "lofty", "logical", "loyal", "lucent", "lucid",
    "lucky", "luminous", "lunar", "lush", "magnetic", "main", "majestic", "major",
    "mannerly", "marine", "maroon", "mature", "maximal", "meek", "mellow", "merry",
    "mighty", "mindful", "minimal", "mint", "mobile", "modern", "modest", "moral",
    "mossy", "musical", "mutual", "national", "native", "natural", "nautical", "near",
    "neat", "nifty", "nimble", "noble", "northern", "notable", "novel", "oaken",
    "obliging", "oceanic", "olive", "open", "optimal", "orange", "orderly", "organic",
    "ornate", "outgoing", "oval", "overt", "pacific", "patient", "peaceful", "pearly",
    "perfect", "petite", "pivotal", "placid", "plain", "playful", "pleasant", "plucky",
    "plural", "poetic", "poised", "polar", "polished", "polite", "positive", "possible",
    "practical", "precious", "precise", "premier", "present", "pretty", "prime", "primal",
    "pristine", "private", "probable", "profound", "prompt", "proper", "proud", "prudent",
    "public", "punctual", "pure", "purple", "quaint", "quantum", "quartz", "quick",
    "quiet", "radiant", "rapid", "rare", "rational", "ready", "real", "refined",
    "regal", "regular", "related", "relative", "relevant", "reliable", "resolute", "rich",
    "right", "robust", "rosy", "round", "royal", "ruby", "rural", "rustic",
    "sacred", "safe", "sage", "saline", "salient", "sandy", "sapphire", "scarlet",
    "scenic", "scholarly", "seasoned", "secret", "secure", "select", "senior", "serene",
    "settled", "sharp", "shining", "shrewd", "silent", "silken", "silver", "simple",
    "sincere", "singular", "skilled", "sleek", "smart", "smooth", "snowy", "sociable",
    "soft", "solar", "solemn", "solid", "sound", "southern", "spanish", "spatial",
    "special", "spirited", "splendid", "spry", "stable", "stark", "stately", "steady",
    "stellar", "sterling", "stoic", "stout", "striking", "strong", "studious", "sturdy",
    "suave", "subtle", "sunny", "super", "superb", "supreme", "sure", "sweet",
    "swift", "tactful", "talented", "tall", "tangible", "tawny", "teal", "tenacious",
    "tender", "thankful", "thorough", "tidy", "timely", "tireless", "topical", "total",
    "tranquil", "true", "trusty", "tuneful", "typical", "ultimate", "unbiased", "uncommon",
    "unique", "united", "upbeat", "upright", "urbane", "useful", "usual", "valiant",
    "valid", "vast", "velvet", "verdant", "versed", "vibrant", "vigilant", "violet",
    "virtual", "visible", "vital", "vivid", "vocal", "warm", "wary", "watchful",
    "welcome", "western", "whole", "wholesome", "willing", "winter", "wise", "witty",
    "wooden", "woolen", "worthy", "young", "youthful", "zealous", "zesty", "zippy",
];

pub(super) const ANIMALS: &[&str] = &[
    "aardvark", "albatross", "alligator", "alpaca", "anaconda", "anchovy", "angelfish", "ant",
    "anteater", "antelope", "armadillo", "avocet", "axolotl", "baboon", "badger", "barnacle",
    "barracuda", "basilisk", "bass", "bat", "bear", "beaver", "bee", "beetle",
    "bison", "bittern", "blackbird", "boa", "boar", "bobcat", "bonobo", "booby",
    "budgerigar", "buffalo", "bug", "bulbul", "bullfinch", "bumblebee", "bunting", "burbot",
    "bustard", "butterfly", "buzzard", "caiman", "camel", "canary", "caracal", "cardinal",
    "caribou", "carp", "cassowary", "cat", "caterpillar", "catfish", "centipede", "chachalaca",
    "chameleon", "chamois", "cheetah", "chickadee", "chicken", "chimpanzee", "chinchilla", "chipmunk",
    "chough", "cicada", "civet", "clam", "cobra", "cockatoo", "cod", "condor",
    "coot", "cormorant", "cougar", "cowbird", "coyote", "crab", "crane", "crayfish",
    "cricket", "crocodile", "crossbill", "crow", "curlew", "cuttlefish", "deer", "dingo",
    "dipper", "dodo", "dog", "dolphin", "donkey", "dormouse", "dotterel", "dove",
    "dragonfly", "drake", "dromedary", "duck", "dugong", "dunlin", "dunnock", "eagle",
    "earwig", "echidna", "eel", "egret", "eider", "eland", "elephant", "elk",
    "emu", "ermine", "falcon", "ferret", "fieldfare", "finch", "firefly", "flamingo",
    "flounder", "fly", "flycatcher", "fox", "frog", "fulmar", "gannet", "gar",
    "gaur", "gazelle", "gecko", "gerbil", "gharial", "gibbon", "giraffe", "gnat",
    "gnu", "goat", "godwit", "goldeneye", "goldfinch", "goosander", "goose", "gopher",
    "gorilla", "goshawk", "grasshopper", "grebe", "greenfinch", "greenshank", "grouse", "guanaco",
    "gudgeon", "guillemot", "gull", "guppy", "haddock", "halibut", "hamster", "hare",
    "harrier", "hawfinch", "hawk", "hedgehog", "hen", "heron", "herring", "hippopotamus",
    "hoopoe", "hornet", "horse", "hound", "hummingbird", "hyena", "ibex", "ibis",
    "iguana", "impala", "jackal", "jackdaw", "jaguar", "jay", "jellyfish", "jerboa",
    "kangaroo", "kestrel", "kingfisher", "kinkajou", "kite", "kitten", "kiwi", "koala",
    "kookaburra", "kouprey", "kudu", "lapwing", "lark", "lemming", "lemur", "leopard",
    "limpet", "linnet", "lion", "lizard", "llama", "loach", "lobster", "locust",
    "loon", "loris", "louse", "lynx", "lyrebird", "macaque", "macaw", "mackerel",
    "magpie", "mallard", "mammoth", "manatee", "mandrill", "mantis", "marlin", "marmoset",
    "marmot", "marten", "meadowlark", "meerkat", "merganser", "merlin", "millipede", "mink",
    "minnow", "mockingbird", "mole", "mongoose", "monkey", "moorhen", "moose", "mosquito",
    "moth", "mouflon", "mouse", "mule", "muskox", "muskrat", "mussel", "narwhal",
    "newt", "nightingale", "nightjar", "numbat", "nuthatch", "ocelot", "octopus", "okapi",
    "opossum", "orangutan", "oriole", "oryx", "osprey", "ostrich", "otter", "ouzel",
    "owl", "ox", "oyster", "oystercatcher", "panda", "pangolin", "panther", "parakeet",
    "parrot", "partridge", "peacock", "peafowl", "pelican", "penguin", "perch", "petrel",
    "pheasant", "pigeon", "pika", "pike", "pintail", "pipit", "piranha", "platypus",
    "plover", "pochard", "polecat", "pony", "porcupine", "porpoise", "possum", "prawn",
    "ptarmigan", "puffin", "puma", "python", "quail", "quetzal", "quokka", "rabbit",
    "raccoon", "rail", "ram", "rat", "raven", "redpoll", "redshank", "redstart",
    "reindeer", "rhea", "rhinoceros", "roadrunner", "robin", "rook", "rosefinch", "ruff",
    "salamander", "salmon", "sanderling", "sandpiper", "sardine", "scorpion", "seahorse", "seal",
    "serval", "shark", "shearwater", "sheep", "shelduck", "shoveler", "shrew", "shrike",
    "shrimp", "siskin", "skink", "skipper", "skua", "skunk", "skylark", "sloth",
    "smew", "snail", "snake", "snipe", "sparrow", "spider", "spoonbill", "squid",
    "squirrel", "starling", "stoat", "stonechat", "stork", "sturgeon", "sunbird", "swallow",
    "swan", "swift", "swordfish", "takin", "tamarin", "tanager", "tapir", "tarsier",
    "teal", "termite", "tern", "thrush", "tiger", "toad", "tortoise", "toucan",
    "treecreeper", "trout", "tuna", "turkey", "turnstone", "turtle", "twite", "urchin",
    "vicuna", "viper", "vole", "vulture", "wagtail", "wallaby", "walrus", "warbler",
    "wasp", "waterbuck", "waxwing", "weasel", "weevil", "whale", "wheatear", "whimbrel",
    "whinchat", "wigeon", "wildcat", "wildebeest", "wolf", "wolverine", "wombat", "woodcock",
    "woodlark", "woodpecker", "wren", "yak", "yellowhammer", "zebra", "zebu", "zorilla",
];
