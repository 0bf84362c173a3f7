//! Fable scheme vocabulary
//!
//! `<Article> <quality> <color> <creature> <adverb> <verb> in a <place-adj> <place> near <location>.`

pub static ARTICLES: [&str; 2] = ["The", "A"];

/// Character qualities
pub static QUALITIES: [&str; 256] = [
    "brave", "bold", "clever", "curious", "daring", "eager", "fearless", "gentle", "gallant",
    "graceful", "grumpy", "happy", "honest", "humble", "jolly", "kind", "loyal", "lucky",
    "merry", "mighty", "modest", "noble", "patient", "playful", "polite", "proud", "quiet",
    "quirky", "restless", "sassy", "shy", "silly", "sleepy", "sly", "smart", "sneaky",
    "stubborn", "swift", "timid", "tired", "trusty", "valiant", "wise", "witty", "zealous",
    "anxious", "awkward", "bashful", "blithe", "bouncy", "brash", "brilliant", "busy", "calm",
    "candid", "careful", "carefree", "caring", "charming", "cheeky", "cheerful", "chirpy",
    "clumsy", "cocky", "cuddly", "cunning", "dainty", "dapper", "dashing", "decent", "devoted",
    "diligent", "dizzy", "dreamy", "droll", "dutiful", "earnest", "elegant", "eloquent",
    "energetic", "fabulous", "faithful", "feisty", "fierce", "fiery", "fickle", "fluffy",
    "fond", "frank", "friendly", "frisky", "fussy", "generous", "genial", "giddy", "gifted",
    "gleeful", "gracious", "greedy", "gruff", "gutsy", "handsome", "hardy", "hasty", "hearty",
    "helpful", "heroic", "hopeful", "humorous", "hungry", "idle", "jaunty", "jealous",
    "jittery", "jovial", "joyful", "keen", "kindly", "lanky", "lazy", "lovely", "loving",
    "mellow", "mischievous", "moody", "nervous", "nimble", "nosy", "obedient", "perky", "pious",
    "plucky", "pompous", "portly", "prim", "prudent", "puny", "quaint", "quick", "rash",
    "regal", "reckless", "reliable", "rowdy", "saintly", "scrappy", "scruffy", "selfish",
    "shrewd", "sincere", "skilled", "skinny", "snobby", "snoopy", "solemn", "spirited", "spry",
    "steady", "stern", "stoic", "stout", "strict", "strong", "studious", "sulky", "superb",
    "tactful", "talented", "tender", "thoughtful", "thrifty", "tireless", "tough", "trusting",
    "truthful", "unruly", "upbeat", "vain", "vigilant", "wacky", "wary", "weary", "whimsical",
    "wicked", "willful", "wily", "wistful", "worthy", "youthful", "zany", "zesty", "ambitious",
    "amiable", "ardent", "artful", "astute", "audacious", "austere", "benevolent", "boastful",
    "boisterous", "capable", "cautious", "chatty", "cordial", "courteous", "cultured", "demure",
    "determined", "diplomatic", "discreet", "docile", "eccentric", "fastidious", "flamboyant",
    "forgetful", "fretful", "frugal", "genteel", "gregarious", "gullible", "haughty",
    "hospitable", "impish", "innocent", "jocular", "judicious", "lenient", "loquacious", "meek",
    "meticulous", "naive", "nonchalant", "obstinate", "optimistic", "peevish", "pensive",
    "placid", "prickly", "proper", "punctual", "quarrelsome", "resolute", "sagacious",
    "sensible", "skeptical", "spunky", "squeamish", "stalwart", "steadfast", "suave",
    "tenacious", "testy", "timorous", "unflappable", "vivacious",
];

pub static COLORS: [&str; 256] = [
    "red", "blue", "green", "yellow", "orange", "purple", "violet", "indigo", "crimson",
    "scarlet", "maroon", "burgundy", "ruby", "cherry", "rose", "pink", "magenta", "fuchsia",
    "coral", "salmon", "peach", "apricot", "amber", "gold", "mustard", "lemon", "lime", "olive",
    "emerald", "jade", "mint", "sage", "teal", "turquoise", "aqua", "cyan", "azure", "cobalt",
    "navy", "sapphire", "cerulean", "periwinkle", "lavender", "lilac", "mauve", "plum",
    "orchid", "amethyst", "grape", "wine", "claret", "garnet", "rust", "copper", "bronze",
    "brass", "tan", "beige", "khaki", "sand", "taupe", "umber", "sepia", "sienna", "ochre",
    "brown", "chocolate", "coffee", "mocha", "cinnamon", "chestnut", "walnut", "mahogany",
    "russet", "auburn", "ginger", "tawny", "buff", "cream", "ivory", "pearl", "white", "snow",
    "silver", "gray", "slate", "charcoal", "ebony", "jet", "black", "onyx", "obsidian", "ash",
    "smoke", "pewter", "steel", "platinum", "chrome", "graphite", "vermilion", "cinnabar",
    "carmine", "cerise", "raspberry", "strawberry", "watermelon", "blush", "rosewood",
    "redwood", "cardinal", "brick", "terracotta", "paprika", "cayenne", "tangerine", "mandarin",
    "pumpkin", "carrot", "saffron", "marigold", "canary", "butter", "banana", "flax", "wheat",
    "straw", "vanilla", "almond", "linen", "bone", "eggshell", "parchment", "oyster", "dove",
    "fog", "mist", "cloud", "storm", "denim", "sky", "cornflower", "powder", "ice", "frost",
    "arctic", "marine", "lagoon", "seafoam", "spruce", "pine", "fern", "moss", "shamrock",
    "clover", "kelly", "pistachio", "avocado", "pear", "chartreuse", "celadon", "verdigris",
    "malachite", "viridian", "juniper", "cypress", "basil", "thyme", "lichen", "heliotrope",
    "wisteria", "thistle", "iris", "hyacinth", "bluebell", "lapis", "ultramarine", "prussian",
    "zaffre", "midnight", "twilight", "dusk", "dawn", "sunset", "ember", "flame", "blaze",
    "lava", "magma", "aubergine", "eggplant", "byzantium", "puce", "mulberry", "boysenberry",
    "blackberry", "blueberry", "cranberry", "currant", "fig", "raisin", "prune", "beet",
    "rhubarb", "cinder", "soot", "coal", "ink", "sable", "licorice", "espresso", "cocoa",
    "caramel", "toffee", "butterscotch", "bisque", "champagne", "chiffon", "cornsilk", "ecru",
    "alabaster", "porcelain", "chalk", "milk", "cotton", "lace", "opal", "moonstone", "quartz",
    "topaz", "citrine", "peridot", "tourmaline", "aquamarine", "beryl", "jasper", "agate",
    "carnelian", "sardonyx", "tanzanite", "zircon", "spinel", "dandelion", "buttercup",
    "daffodil", "primrose", "jonquil", "goldenrod", "mimosa", "poppy", "tulip", "peony",
    "magnolia", "camellia", "azalea", "begonia", "hibiscus",
];

/// Animals and mythical beasts
pub static CREATURES: [&str; 256] = [
    "fox", "wolf", "bear", "badger", "otter", "beaver", "rabbit", "hare", "squirrel",
    "chipmunk", "hedgehog", "porcupine", "raccoon", "skunk", "weasel", "ferret", "mink",
    "stoat", "marten", "wolverine", "lynx", "bobcat", "cougar", "panther", "leopard", "jaguar",
    "cheetah", "tiger", "lion", "ocelot", "serval", "caracal", "elephant", "rhino", "hippo",
    "giraffe", "zebra", "okapi", "antelope", "gazelle", "impala", "gnu", "bison", "buffalo",
    "yak", "ox", "moose", "elk", "deer", "reindeer", "caribou", "camel", "llama", "alpaca",
    "donkey", "mule", "horse", "pony", "stallion", "goat", "sheep", "ram", "lamb", "pig",
    "boar", "warthog", "tapir", "armadillo", "anteater", "sloth", "koala", "kangaroo",
    "wallaby", "wombat", "platypus", "echidna", "possum", "lemur", "monkey", "baboon",
    "gorilla", "chimp", "orangutan", "gibbon", "mandrill", "marmoset", "tamarin", "bat", "mole",
    "shrew", "vole", "mouse", "rat", "hamster", "gerbil", "chinchilla", "muskrat", "seal",
    "walrus", "dolphin", "whale", "orca", "narwhal", "beluga", "porpoise", "manatee", "dugong",
    "shark", "stingray", "eel", "octopus", "squid", "cuttlefish", "nautilus", "jellyfish",
    "starfish", "urchin", "crab", "lobster", "shrimp", "prawn", "krill", "clam", "mussel",
    "snail", "slug", "worm", "leech", "spider", "scorpion", "tarantula", "beetle", "ant", "bee",
    "wasp", "hornet", "moth", "butterfly", "dragonfly", "damselfly", "mantis", "cricket",
    "grasshopper", "locust", "cicada", "firefly", "ladybug", "termite", "flea", "mosquito",
    "gnat", "eagle", "hawk", "falcon", "kestrel", "osprey", "vulture", "condor", "owl", "raven",
    "crow", "magpie", "jay", "sparrow", "finch", "robin", "wren", "thrush", "starling",
    "swallow", "lark", "nightingale", "warbler", "parrot", "macaw", "cockatoo", "parakeet",
    "toucan", "hornbill", "kingfisher", "woodpecker", "heron", "crane", "stork", "egret",
    "ibis", "pelican", "flamingo", "swan", "goose", "duck", "mallard", "puffin", "penguin",
    "albatross", "gull", "tern", "cormorant", "ostrich", "emu", "cassowary", "peacock",
    "pheasant", "quail", "grouse", "partridge", "turkey", "chicken", "rooster", "hen", "pigeon",
    "frog", "toad", "newt", "salamander", "axolotl", "gecko", "iguana", "lizard", "chameleon",
    "skink", "komodo", "tortoise", "turtle", "terrapin", "crocodile", "alligator", "caiman",
    "cobra", "viper", "python", "boa", "adder", "mamba", "rattlesnake", "anaconda", "dragon",
    "griffin", "unicorn", "phoenix", "sphinx", "hydra", "kraken", "yeti", "sasquatch", "goblin",
    "troll", "ogre", "pixie", "sprite", "elf", "dwarf", "gnome", "wyvern", "basilisk",
    "chimera",
];

pub static ADVERBS: [&str; 256] = [
    "quickly", "slowly", "quietly", "loudly", "gently", "boldly", "bravely", "calmly",
    "eagerly", "gladly", "happily", "sadly", "softly", "swiftly", "warmly", "wildly", "wisely",
    "brightly", "cheerfully", "clumsily", "curiously", "carefully", "carelessly", "deftly",
    "dreamily", "elegantly", "fiercely", "firmly", "fondly", "freely", "gracefully", "greedily",
    "grimly", "hastily", "heavily", "honestly", "hungrily", "idly", "jauntily", "jokingly",
    "joyfully", "keenly", "lazily", "lightly", "loyally", "madly", "merrily", "mightily",
    "neatly", "nervously", "nimbly", "noisily", "oddly", "openly", "patiently", "playfully",
    "politely", "promptly", "proudly", "rapidly", "rarely", "readily", "abruptly", "absently",
    "acutely", "airily", "angrily", "anxiously", "ardently", "awkwardly", "badly", "bashfully",
    "blindly", "blissfully", "bluntly", "boastfully", "briskly", "broadly", "busily",
    "candidly", "casually", "cautiously", "cleverly", "closely", "coolly", "cosily", "crossly",
    "cruelly", "daintily", "daringly", "dearly", "deeply", "defiantly", "delicately",
    "diligently", "dimly", "doubtfully", "dutifully", "earnestly", "easily", "eerily",
    "energetically", "evenly", "faintly", "faithfully", "famously", "fervently", "finally",
    "fitfully", "fluently", "foolishly", "frankly", "frantically", "frightfully", "fully",
    "furiously", "generously", "gleefully", "gloomily", "grandly", "gratefully", "gravely",
    "gruffly", "guiltily", "hopefully", "hurriedly", "innocently", "intensely", "jealously",
    "jovially", "joyously", "justly", "knowingly", "lamely", "lavishly", "loftily", "longingly",
    "loosely", "lovingly", "majestically", "meekly", "mildly", "miserably", "mockingly",
    "mysteriously", "naturally", "nearly", "nicely", "noiselessly", "obediently", "officially",
    "painfully", "perfectly", "pleasantly", "poorly", "potently", "powerfully", "punctually",
    "quaintly", "queasily", "quizzically", "recklessly", "reluctantly", "repeatedly",
    "restfully", "rightfully", "rigidly", "roughly", "rudely", "ruefully", "safely", "scarcely",
    "secretly", "selfishly", "serenely", "seriously", "sharply", "sheepishly", "shyly",
    "silently", "sleepily", "slyly", "smoothly", "solemnly", "speedily", "stealthily",
    "sternly", "steadily", "stiffly", "strictly", "suddenly", "sullenly", "sweetly", "tenderly",
    "tensely", "thankfully", "thoughtfully", "tightly", "timidly", "tiredly", "triumphantly",
    "truly", "trustingly", "unexpectedly", "urgently", "vaguely", "valiantly", "victoriously",
    "vigorously", "violently", "warily", "wearily", "willingly", "wistfully", "woefully",
    "wrongly", "yearningly", "zealously", "zestfully", "briefly", "bitterly", "blankly",
    "boisterously", "bouncily", "breathlessly", "cheekily", "childishly", "coyly", "crisply",
    "cunningly", "curtly", "dashingly", "dizzily", "dramatically", "drowsily", "dully",
    "eloquently", "endlessly", "enormously", "excitedly", "feverishly", "fiendishly", "flatly",
    "frostily", "giddily", "gingerly", "gloriously", "heartily", "helpfully", "hoarsely",
    "humbly", "icily", "impatiently", "jubilantly", "lightheartedly", "limply",
];

/// Past-tense verbs
pub static VERBS: [&str; 256] = [
    "danced", "sang", "slept", "jumped", "wandered", "waltzed", "whistled", "laughed", "wept",
    "giggled", "chuckled", "pondered", "dreamed", "dozed", "napped", "rested", "lingered",
    "lounged", "strolled", "sauntered", "marched", "paraded", "skipped", "hopped", "leaped",
    "bounced", "tumbled", "rolled", "spun", "twirled", "pirouetted", "glided", "soared", "flew",
    "floated", "drifted", "sailed", "rowed", "paddled", "swam", "splashed", "waded", "climbed",
    "crawled", "crept", "sneaked", "tiptoed", "scurried", "scampered", "dashed", "raced",
    "sprinted", "jogged", "trotted", "galloped", "charged", "rushed", "hurried", "zoomed",
    "darted", "fled", "hid", "searched", "explored", "roamed", "rambled", "trekked", "hiked",
    "journeyed", "traveled", "voyaged", "ventured", "cooked", "baked", "feasted", "dined",
    "munched", "nibbled", "sipped", "gulped", "slurped", "chewed", "painted", "sketched",
    "drew", "wrote", "read", "studied", "mused", "meditated", "prayed", "chanted", "hummed",
    "yodeled", "crooned", "serenaded", "drummed", "strummed", "fiddled", "juggled", "performed",
    "acted", "mimed", "bowed", "curtsied", "waved", "winked", "grinned", "smiled", "frowned",
    "scowled", "sulked", "pouted", "grumbled", "muttered", "mumbled", "whispered", "shouted",
    "hollered", "yelled", "roared", "howled", "barked", "growled", "purred", "meowed",
    "chirped", "tweeted", "squawked", "cawed", "hooted", "clucked", "quacked", "honked",
    "bleated", "brayed", "neighed", "snorted", "sniffed", "sneezed", "coughed", "yawned",
    "stretched", "shivered", "trembled", "quivered", "wobbled", "teetered", "swayed", "rocked",
    "bobbed", "nodded", "blinked", "glowed", "sparkled", "shimmered", "glittered", "flickered",
    "flashed", "gleamed", "twinkled", "blazed", "burned", "smoldered", "froze", "melted",
    "thawed", "bloomed", "blossomed", "grew", "sprouted", "flourished", "wilted", "withered",
    "rusted", "crumbled", "collapsed", "vanished", "appeared", "emerged", "arrived", "departed",
    "returned", "waited", "paused", "stopped", "started", "began", "finished", "won", "lost",
    "fought", "battled", "wrestled", "boxed", "fenced", "dueled", "sparred", "argued",
    "debated", "bickered", "quarreled", "squabbled", "gossiped", "chatted", "chattered",
    "babbled", "lectured", "preached", "taught", "learned", "practiced", "trained", "exercised",
    "worked", "toiled", "labored", "tinkered", "puttered", "dabbled", "gardened", "farmed",
    "fished", "hunted", "foraged", "gathered", "harvested", "knitted", "sewed", "stitched",
    "weaved", "whittled", "carved", "sculpted", "built", "hammered", "sawed", "drilled",
    "welded", "forged", "brewed", "pickled", "stirred", "whisked", "kneaded", "toasted",
    "roasted", "grilled", "fried", "boiled", "steamed", "simmered", "camped", "picnicked",
    "sunbathed", "skated",
];

/// Place adjectives, all consonant-initial to follow "a"
pub static PLACE_ADJECTIVES: [&str; 256] = [
    "misty", "foggy", "sunny", "shady", "windy", "rainy", "snowy", "frosty", "dusty", "sandy",
    "rocky", "muddy", "mossy", "grassy", "leafy", "woody", "dark", "dim", "gloomy", "shadowy",
    "sunlit", "moonlit", "starlit", "candlelit", "lamplit", "torchlit", "silent", "noisy",
    "bustling", "crowded", "deserted", "lonely", "remote", "distant", "faraway", "nearby",
    "hidden", "secret", "forgotten", "ruined", "crumbling", "broken", "battered", "shabby",
    "tidy", "cozy", "snug", "warm", "chilly", "cold", "frozen", "humid", "muggy", "damp",
    "soggy", "dry", "parched", "barren", "fertile", "lush", "verdant", "haunted", "cursed",
    "magical", "mystical", "mysterious", "sacred", "holy", "peaceful", "tranquil", "tall",
    "tiny", "small", "huge", "giant", "vast", "narrow", "wide", "long", "short", "deep",
    "shallow", "high", "low", "steep", "flat", "hilly", "craggy", "jagged", "winding",
    "twisting", "crooked", "curved", "round", "square", "tilted", "leaning", "sunken",
    "floating", "flooded", "drowned", "burnt", "charred", "scorched", "smoky", "hazy", "murky",
    "cloudy", "stormy", "thundering", "breezy", "blustery", "gusty", "wintry", "summery",
    "fresh", "clean", "dirty", "grimy", "filthy", "messy", "cluttered", "spotless", "gilded",
    "wooden", "stone", "glass", "costly", "cheap", "fancy", "plain", "grand", "royal", "rustic",
    "rural", "suburban", "pastoral", "coastal", "seaside", "riverside", "lakeside", "tropical",
    "polar", "northern", "southern", "western", "foreign", "local", "famous", "notorious",
    "popular", "private", "public", "hushed", "drowsy", "creaky", "rickety", "solid",
    "sprawling", "towering", "cramped", "spacious", "roomy", "vaulted", "domed", "walled",
    "gated", "shuttered", "boarded", "tangled", "thorny", "weedy", "flowery", "fragrant",
    "smelly", "stinky", "musty", "dank", "dreary", "drab", "dull", "colorful", "vibrant",
    "festive", "magnificent", "splendid", "gleaming", "glittering", "shimmering", "sparkling",
    "twinkling", "dusky", "shimmery", "velvety", "silken", "feathery", "frilly", "lacy",
    "tiled", "thatched", "timbered", "cobbled", "paved", "gravelly", "pebbly", "marshy",
    "boggy", "swampy", "jungly", "forested", "wooded", "bushy", "brambly", "ferny", "piney",
    "palmy", "sheltered", "secluded", "tucked", "nestled", "perched", "hilltop", "mountainside",
    "cliffside", "seafront", "waterfront", "harborside", "portside", "bayside", "beachy",
    "dune", "sunbaked", "sunburnt", "windswept", "rainswept", "snowbound", "storied",
    "legendary", "fabled", "mythic", "mythical", "phantom", "ghostly", "spooky", "creepy",
    "weird", "strange", "bizarre", "peculiar", "pretty", "beautiful", "gorgeous", "stunning",
    "dazzling", "radiant", "luminous",
];

/// Buildings and landscape features
pub static PLACES: [&str; 256] = [
    "cottage", "cabin", "hut", "shack", "shed", "barn", "stable", "farmhouse", "mill",
    "windmill", "watermill", "bakery", "tavern", "inn", "pub", "cafe", "diner", "bistro",
    "restaurant", "kitchen", "pantry", "cellar", "attic", "loft", "garret", "chamber", "parlor",
    "library", "study", "office", "classroom", "school", "academy", "college", "university",
    "museum", "gallery", "theater", "cinema", "opera", "arena", "stadium", "circus", "carnival",
    "fairground", "market", "bazaar", "shop", "store", "boutique", "pharmacy", "apothecary",
    "clinic", "hospital", "infirmary", "chapel", "church", "cathedral", "temple", "shrine",
    "monastery", "abbey", "convent", "mosque", "pagoda", "castle", "palace", "fortress",
    "citadel", "keep", "tower", "turret", "lighthouse", "belfry", "dungeon", "prison", "jail",
    "courthouse", "harbor", "port", "dock", "pier", "wharf", "marina", "shipyard", "boathouse",
    "station", "depot", "terminal", "airport", "hangar", "garage", "workshop", "factory",
    "forge", "foundry", "smithy", "warehouse", "granary", "silo", "orchard", "vineyard",
    "garden", "greenhouse", "nursery", "meadow", "field", "pasture", "prairie", "valley",
    "canyon", "gorge", "ravine", "glen", "dale", "grove", "forest", "woodland", "jungle",
    "thicket", "swamp", "marsh", "bog", "fen", "lake", "pond", "river", "stream", "creek",
    "brook", "waterfall", "spring", "oasis", "desert", "beach", "cove", "bay", "inlet",
    "island", "islet", "reef", "cave", "cavern", "grotto", "tunnel", "mine", "quarry",
    "mountain", "hill", "cliff", "ridge", "peak", "summit", "volcano", "glacier", "tundra",
    "plateau", "mesa", "butte", "crater", "park", "plaza", "courtyard", "alley", "street",
    "avenue", "boulevard", "bridge", "tollbooth", "gatehouse", "lodge", "chalet", "villa",
    "mansion", "manor", "estate", "ranch", "homestead", "igloo", "yurt", "tent", "teepee",
    "wigwam", "treehouse", "bungalow", "apartment", "penthouse", "hotel", "hostel", "motel",
    "resort", "spa", "bathhouse", "sauna", "gym", "dojo", "studio", "ballroom", "hall",
    "hallway", "corridor", "foyer", "lobby", "atrium", "balcony", "terrace", "porch", "veranda",
    "patio", "rooftop", "basement", "vault", "bunker", "observatory", "planetarium", "aquarium",
    "zoo", "menagerie", "aviary", "kennel", "hatchery", "laboratory", "bakehouse", "brewery",
    "distillery", "winery", "creamery", "dairy", "butchery", "fishery", "cannery", "sawmill",
    "lumberyard", "junkyard", "scrapyard", "graveyard", "cemetery", "crypt", "tomb",
    "mausoleum", "catacomb", "labyrinth", "maze", "arboretum", "conservatory", "bandstand",
    "gazebo", "pavilion", "rotunda", "colonnade", "cloister", "quadrangle", "campus",
    "schoolhouse", "playhouse", "clubhouse",
];

/// Named real-world places, possibly multi-word
pub static LOCATIONS: [&str; 256] = [
    "Paris", "London", "Rome", "Berlin", "Madrid", "Lisbon", "Vienna", "Prague", "Budapest",
    "Warsaw", "Athens", "Istanbul", "Cairo", "Nairobi", "Lagos", "Accra", "Dakar", "Casablanca",
    "Marrakesh", "Tunis", "Tripoli", "Khartoum", "Addis Ababa", "Tokyo", "Kyoto", "Osaka",
    "Seoul", "Beijing", "Shanghai", "Hong Kong", "Taipei", "Manila", "Hanoi", "Bangkok",
    "Jakarta", "Singapore", "Delhi", "Mumbai", "Kolkata", "Chennai", "Karachi", "Lahore",
    "Kabul", "Tehran", "Baghdad", "Damascus", "Beirut", "Jerusalem", "Amman", "Riyadh", "Dubai",
    "Doha", "Muscat", "Moscow", "Kyiv", "Minsk", "Riga", "Tallinn", "Vilnius", "Helsinki",
    "Stockholm", "Oslo", "Copenhagen", "Reykjavik", "Dublin", "Edinburgh", "Cardiff", "Belfast",
    "Amsterdam", "Brussels", "Zurich", "Geneva", "Milan", "Venice", "Florence", "Naples",
    "Sicily", "Barcelona", "Seville", "Valencia", "Porto", "Marseille", "Lyon", "Bordeaux",
    "Munich", "Hamburg", "Frankfurt", "Cologne", "Dresden", "Krakow", "Bucharest", "Sofia",
    "Belgrade", "Zagreb", "Sarajevo", "Ljubljana", "Bratislava", "New York", "Boston",
    "Chicago", "Denver", "Seattle", "Portland", "Austin", "Dallas", "Houston", "Miami",
    "Atlanta", "Nashville", "Memphis", "Phoenix", "Las Vegas", "Los Angeles", "San Francisco",
    "Toronto", "Montreal", "Vancouver", "Quebec", "Havana", "Mexico City", "Lima", "Bogota",
    "Quito", "Santiago", "Buenos Aires", "Montevideo", "Caracas", "La Paz", "Rio de Janeiro",
    "Sydney", "Melbourne", "Perth", "Auckland", "Wellington", "Peru", "Chile", "Brazil",
    "Argentina", "Mexico", "Canada", "Alaska", "Hawaii", "Iceland", "Greenland", "Norway",
    "Sweden", "Finland", "Denmark", "Ireland", "Scotland", "Wales", "Spain", "Portugal",
    "France", "Italy", "Greece", "Turkey", "Egypt", "Morocco", "Kenya", "Tanzania",
    "Madagascar", "Ethiopia", "Ghana", "Nigeria", "Nepal", "Tibet", "Bhutan", "Mongolia",
    "Siberia", "Japan", "Korea", "China", "India", "Vietnam", "Thailand", "Cambodia", "Laos",
    "Burma", "Borneo", "Java", "Bali", "Fiji", "Samoa", "Tahiti", "Tonga", "Jamaica", "Cuba",
    "Haiti", "the Bahamas", "Bermuda", "Patagonia", "Antarctica", "the Sahara", "the Gobi",
    "the Kalahari", "the Amazon", "the Andes", "the Alps", "the Himalayas", "the Rockies",
    "Everest", "Kilimanjaro", "Niagara Falls", "Yosemite", "Yellowstone", "Sedona", "Timbuktu",
    "Zanzibar", "Samarkand", "Bukhara", "Petra", "Babylon", "Troy", "Sparta", "Carthage",
    "Pompeii", "Atlantis", "Avalon", "Camelot", "El Dorado", "Xanadu", "Narnia", "Mordor",
    "Gotham", "Hogwarts", "Oz", "Neverland", "Wonderland", "Lilliput", "Utopia", "Arcadia",
    "Shangri-La", "Valhalla", "Olympus", "Asgard", "Lemuria", "Hyperborea", "the North Pole",
    "the South Pole", "the Equator", "the Arctic Circle", "the Dead Sea", "the Red Sea",
    "the Black Sea", "the Nile", "the Danube", "the Thames", "the Seine", "the Rhine",
    "the Yangtze", "the Ganges", "the Mississippi", "the Grand Canyon", "Machu Picchu",
    "Angkor Wat",
];
